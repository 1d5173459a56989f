use super::summary::Summary;
use crate::B_BLIND;
use crate::Chips;
use crate::N;
use crate::RAISES_PER_ROUND;
use crate::RAISES_PER_STREET;
use crate::STACK;
use crate::S_BLIND;
use crate::betting::Action;
use crate::betting::RaiseCapState;
use crate::betting::SCHEDULE;
use crate::betting::Turn;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Street;
use crate::cards::Strength;
use crate::players::Event;
use crate::players::Player;
use std::cmp::Ordering;

/// Heads-up fixed-limit dealer.
///
/// Seat 0 and seat 1 alternate the big blind. The big blind is the first
/// raise of preflop. Each street allows four raises between both seats,
/// and each seat may raise four times per hand. The opening call of a
/// street never closes it, so the big blind gets its option and a
/// postflop check passes the action on.
///
/// Internally the betting state is kept with seat 0 as [`Turn::Hero`];
/// every event is translated into the recipient's own point of view.
pub struct Table<A: Player, B: Player> {
    hero: A,
    villain: B,
    stacks: [Chips; N],
    big_blind: usize,
    summary: Summary,
}

impl<A: Player, B: Player> Table<A, B> {
    pub fn new(hero: A, villain: B) -> Self {
        Self {
            hero,
            villain,
            stacks: [STACK; N],
            big_blind: 1,
            summary: Summary::default(),
        }
    }
    pub fn hero(&self) -> &A {
        &self.hero
    }
    pub fn villain(&self) -> &B {
        &self.villain
    }
    pub fn stacks(&self) -> [Chips; N] {
        self.stacks
    }

    /// Play up to `n` hands, stopping early once a seat cannot post the big blind.
    pub fn play(&mut self, n: usize) -> anyhow::Result<Summary> {
        self.broadcast(|_| Event::Start { stack: STACK })?;
        for _ in 0..n {
            if self.stacks.iter().any(|s| *s < B_BLIND) {
                log::info!("a seat is out of chips after {} hands", self.summary.hands);
                break;
            }
            self.hand()?;
            self.big_blind = 1 - self.big_blind;
            assert_eq!(self.stacks.iter().sum::<Chips>(), STACK * N as Chips, "chips leaked");
        }
        self.summary.stacks = self.stacks;
        log::info!("{}", self.summary);
        Ok(self.summary)
    }

    /// Deal, bet and settle one hand.
    pub fn hand(&mut self) -> anyhow::Result<()> {
        let bb = self.big_blind;
        let sb = 1 - bb;
        let mut deck = Deck::new();
        let holes = [deck.hole(), deck.hole()];
        let stacks = self.stacks;
        self.broadcast(|seat| Event::Round {
            hole: holes[seat],
            stacks: (stacks[seat], stacks[1 - seat]),
            big_blind: Self::relative(seat, bb),
            small_blind: S_BLIND,
        })?;
        let mut blinds = [0; N];
        blinds[sb] = S_BLIND;
        blinds[bb] = B_BLIND;
        let mut state = RaiseCapState {
            street: Street::Pref,
            street_raises: RAISES_PER_STREET - 1,
            hero_raises: RAISES_PER_ROUND,
            villain_raises: RAISES_PER_ROUND,
            hero_bet: blinds[0],
            villain_bet: blinds[1],
            hero_stack: stacks[0] - blinds[0],
            villain_stack: stacks[1] - blinds[1],
        };
        let mut board = Hand::empty();
        for street in Street::all() {
            if street != Street::Pref {
                board = (board.size()..street.n_public())
                    .map(|_| deck.draw())
                    .map(Hand::from)
                    .fold(board, Hand::add);
                state.street = street;
                state.street_raises = RAISES_PER_STREET;
            }
            self.broadcast(|_| Event::Street { street, board })?;
            if state.hero_stack == 0 || state.villain_stack == 0 {
                continue;
            }
            let opener = match street {
                Street::Pref => sb,
                _ => bb,
            };
            if let Some(folder) = self.betting(&mut state, opener)? {
                return self.settle(&state, Some(1 - folder), true);
            }
        }
        let strengths = holes.map(|hole| Strength::from(Hand::add(Hand::from(hole), board)));
        log::debug!("showdown {} {} vs {} {}", holes[0], strengths[0], holes[1], strengths[1]);
        match strengths[0].cmp(&strengths[1]) {
            Ordering::Greater => self.settle(&state, Some(0), false),
            Ordering::Less => self.settle(&state, Some(1), false),
            Ordering::Equal => self.settle(&state, None, false),
        }
    }

    /// Run one street of betting. Returns the seat that folded, if any.
    fn betting(&mut self, state: &mut RaiseCapState, opener: usize) -> anyhow::Result<Option<usize>> {
        let mut seat = opener;
        let mut opened = false;
        loop {
            let turn = Self::absolute(seat);
            let legal = Self::legal(state, turn);
            let action = self.seat(seat).decide(&legal)?;
            anyhow::ensure!(
                legal.contains(&action),
                "seat {} chose {} outside {:?}",
                seat,
                action,
                legal
            );
            *state = match action {
                Action::Fold => *state,
                Action::Call => state.call(turn),
                Action::Raise(amount) => state.raise(turn, amount),
            };
            let bet = state.bet(turn);
            self.broadcast(|i| Event::Act {
                actor: Self::relative(i, seat),
                action,
                bet,
            })?;
            match action {
                Action::Fold => return Ok(Some(seat)),
                Action::Call if opened => return Ok(None),
                _ => {}
            }
            opened = true;
            seat = 1 - seat;
        }
    }

    /// Pay out the pot and tell both seats.
    fn settle(&mut self, state: &RaiseCapState, winner: Option<usize>, folded: bool) -> anyhow::Result<()> {
        let bets = [state.hero_bet, state.villain_bet];
        let mut stacks = [state.hero_stack, state.villain_stack];
        match winner {
            Some(w) => {
                stacks[w] += bets[0] + bets[1];
                self.summary.wins[w] += 1;
                if folded {
                    self.summary.folds[1 - w] += 1;
                }
            }
            None => {
                assert_eq!(bets[0], bets[1], "split with unequal bets");
                stacks[0] += bets[0];
                stacks[1] += bets[1];
                self.summary.splits += 1;
            }
        }
        self.stacks = stacks;
        self.summary.hands += 1;
        log::debug!(
            "hand {:>5} winner {:?} pot {} stacks {:?}",
            self.summary.hands,
            winner,
            bets[0] + bets[1],
            stacks
        );
        self.broadcast(|seat| Event::Result {
            winner: winner.map(|w| Self::relative(seat, w)),
            stacks: (stacks[seat], stacks[1 - seat]),
        })
    }

    /// Fold and call are always offered; a raise when the caps and stacks allow it.
    fn legal(state: &RaiseCapState, turn: Turn) -> Vec<Action> {
        let mut legal = vec![Action::Fold, Action::Call];
        if state.can_raise(turn) {
            legal.push(Action::Raise(state.raise_size(turn, &SCHEDULE)));
        }
        legal
    }

    fn seat(&mut self, seat: usize) -> &mut dyn Player {
        match seat {
            0 => &mut self.hero,
            _ => &mut self.villain,
        }
    }

    fn broadcast<F>(&mut self, event: F) -> anyhow::Result<()>
    where
        F: Fn(usize) -> Event,
    {
        for seat in 0..N {
            self.seat(seat).notify(&event(seat))?;
        }
        Ok(())
    }

    /// How seat `actor` looks from seat `viewer`.
    fn relative(viewer: usize, actor: usize) -> Turn {
        match viewer == actor {
            true => Turn::Hero,
            false => Turn::Villain,
        }
    }
    fn absolute(seat: usize) -> Turn {
        Self::relative(0, seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::MonteCarlo;
    use crate::players::Agent;
    use crate::players::Robot;
    use crate::search::Settings;

    /// Records every event it sees and always calls.
    #[derive(Default)]
    struct Caller {
        events: Vec<Event>,
    }
    impl Player for Caller {
        fn decide(&mut self, _: &[Action]) -> anyhow::Result<Action> {
            Ok(Action::Call)
        }
        fn notify(&mut self, event: &Event) -> anyhow::Result<()> {
            self.events.push(event.clone());
            Ok(())
        }
    }

    /// Raises whenever allowed.
    struct Maniac;
    impl Player for Maniac {
        fn decide(&mut self, legal: &[Action]) -> anyhow::Result<Action> {
            Ok(*legal.last().unwrap_or(&Action::Call))
        }
        fn notify(&mut self, _: &Event) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn calling_stations_reach_showdown() {
        let mut table = Table::new(Caller::default(), Caller::default());
        table.play(1).unwrap();
        let events = &table.hero().events;
        let streets = events
            .iter()
            .filter(|e| matches!(e, Event::Street { .. }))
            .count();
        assert_eq!(streets, 4);
        // preflop: small blind completes, big blind checks; then two checks per street
        let acts = events
            .iter()
            .filter(|e| matches!(e, Event::Act { .. }))
            .count();
        assert_eq!(acts, 8);
        assert!(matches!(events.last(), Some(Event::Result { .. })));
        let stacks = table.stacks();
        assert!(stacks == [1020, 980] || stacks == [980, 1020] || stacks == [1000, 1000]);
    }

    #[test]
    fn raise_caps_hold() {
        let mut table = Table::new(Maniac, Maniac);
        let summary = table.play(2).unwrap();
        // preflop: three raises on top of the blind, capped at 80
        // flop: four more raises, 160; turn: one raise before the budgets run dry, 200
        for stack in summary.stacks {
            assert!([0, 200, 400].contains(&(stack - STACK).abs()));
        }
        assert_eq!(summary.stacks.iter().sum::<Chips>(), 2 * STACK);
    }

    #[test]
    fn self_play_conserves_chips_and_learns() {
        let settings = Settings {
            trials: 40,
            ..Settings::default()
        };
        let mut table = Table::new(Agent::new(MonteCarlo::default(), settings), Robot::default());
        let summary = table.play(120).unwrap();
        assert!(summary.hands > 0);
        assert_eq!(table.hero().memory().hands(), summary.hands);
        assert_eq!(summary.stacks.iter().sum::<Chips>(), 2 * STACK);
        assert_eq!(
            summary.wins.iter().sum::<usize>() + summary.splits,
            summary.hands
        );
    }
}
