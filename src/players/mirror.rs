use super::event::Event;
use crate::Chips;
use crate::N_STREETS;
use crate::RAISES_PER_ROUND;
use crate::RAISES_PER_STREET;
use crate::betting::Action;
use crate::betting::RaiseCapState;
use crate::betting::Turn;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Observation;
use crate::cards::Street;
use crate::learning::Outcome;

/// The hero's running picture of the current hand, rebuilt from events.
///
/// Feeds produce the occasional duplicated action notification, so an
/// action identical to the previous one is dropped unless a street has
/// just started. No player can make the same move twice in a row without
/// the other acting in between, so nothing real is lost.
#[derive(Debug, Clone, Default)]
pub struct Mirror {
    hole: Option<Hole>,
    board: Hand,
    street: Street,
    big_blind: bool,
    hero_bet: Chips,
    villain_bet: Chips,
    hero_stack: Chips,
    villain_stack: Chips,
    street_raises: u8,
    hero_raises: u8,
    villain_raises: u8,
    first: bool,
    last: Option<(Turn, Action, Chips)>,
    raises: [u8; N_STREETS],
    levels: Vec<Chips>,
    folded: Option<Turn>,
    winner: Option<Option<Turn>>,
}

impl Mirror {
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    /// No action yet on this street.
    pub fn first(&self) -> bool {
        self.first
    }
    pub fn big_blind(&self) -> bool {
        self.big_blind
    }

    /// What the hero sees right now.
    pub fn observation(&self) -> anyhow::Result<Observation> {
        let hole = self.hole.ok_or_else(|| anyhow::anyhow!("no hole cards dealt"))?;
        Observation::try_from((hole, self.board))
    }

    /// Betting state for a hero decision.
    pub fn snapshot(&self) -> RaiseCapState {
        RaiseCapState {
            street: self.street,
            street_raises: self.street_raises,
            hero_raises: self.hero_raises,
            villain_raises: self.villain_raises,
            hero_bet: self.hero_bet,
            villain_bet: self.villain_bet,
            hero_stack: self.hero_stack,
            villain_stack: self.villain_stack,
        }
    }

    /// Summary of the finished hand for the learning store.
    pub fn outcome(&self) -> anyhow::Result<Outcome> {
        let winner = self
            .winner
            .ok_or_else(|| anyhow::anyhow!("hand has no result yet"))?;
        Ok(Outcome {
            won: winner == Some(Turn::Hero),
            folded: self.folded,
            big_blind: self.big_blind,
            raises: self.raises,
            levels: self.levels.clone(),
            bet: self.hero_bet,
        })
    }

    pub fn apply(&mut self, event: &Event) -> anyhow::Result<()> {
        match event {
            Event::Start { stack } => {
                *self = Self::default();
                self.hero_stack = *stack;
                self.villain_stack = *stack;
            }
            Event::Round {
                hole,
                stacks,
                big_blind,
                small_blind,
            } => self.deal(*hole, *stacks, *big_blind, *small_blind),
            Event::Street { street, board } => self.open(*street, *board)?,
            Event::Act { actor, action, bet } => self.act(*actor, *action, *bet)?,
            Event::Result { winner, stacks } => {
                self.winner = Some(*winner);
                self.hero_stack = stacks.0;
                self.villain_stack = stacks.1;
            }
        }
        Ok(())
    }

    fn deal(&mut self, hole: Hole, stacks: (Chips, Chips), big_blind: Turn, small_blind: Chips) {
        let (hero_blind, villain_blind) = match big_blind {
            Turn::Hero => (2 * small_blind, small_blind),
            Turn::Villain => (small_blind, 2 * small_blind),
        };
        let hero_bet = hero_blind.min(stacks.0);
        let villain_bet = villain_blind.min(stacks.1);
        let forced = [hero_bet, villain_bet]
            .iter()
            .filter(|bet| **bet > small_blind)
            .count() as u8;
        *self = Self {
            hole: Some(hole),
            big_blind: big_blind.is_hero(),
            hero_bet,
            villain_bet,
            hero_stack: stacks.0 - hero_bet,
            villain_stack: stacks.1 - villain_bet,
            street_raises: RAISES_PER_STREET - forced,
            hero_raises: RAISES_PER_ROUND,
            villain_raises: RAISES_PER_ROUND,
            ..Self::default()
        };
    }

    fn open(&mut self, street: Street, board: Hand) -> anyhow::Result<()> {
        anyhow::ensure!(
            board.size() == street.n_public(),
            "{} with {} board cards",
            street,
            board.size()
        );
        if street != Street::Pref {
            anyhow::ensure!(street == self.street.next(), "{} after {}", street, self.street);
            self.street_raises = RAISES_PER_STREET;
            self.levels.push(self.hero_bet);
        }
        self.street = street;
        self.board = board;
        self.first = true;
        Ok(())
    }

    fn act(&mut self, actor: Turn, action: Action, bet: Chips) -> anyhow::Result<()> {
        if !self.first && self.last == Some((actor, action, bet)) {
            log::warn!("dropping repeated {} {} at {}", actor, action, bet);
            return Ok(());
        }
        if action.is_fold() {
            self.last = Some((actor, action, bet));
            self.first = false;
            self.folded = Some(actor);
            return Ok(());
        }
        let (stake, stack) = match actor {
            Turn::Hero => (&mut self.hero_bet, &mut self.hero_stack),
            Turn::Villain => (&mut self.villain_bet, &mut self.villain_stack),
        };
        anyhow::ensure!(bet >= *stake, "{} bet shrank from {} to {}", actor, stake, bet);
        anyhow::ensure!(bet - *stake <= *stack, "{} cannot afford {}", actor, bet);
        *stack -= bet - *stake;
        *stake = bet;
        self.last = Some((actor, action, bet));
        self.first = false;
        if action.is_aggro() {
            self.street_raises = self.street_raises.saturating_sub(1);
            match actor {
                Turn::Hero => self.hero_raises = self.hero_raises.saturating_sub(1),
                Turn::Villain if self.villain_raises > 0 => {
                    self.villain_raises -= 1;
                    self.raises[self.street.index()] += 1;
                }
                Turn::Villain => log::warn!("villain raised past the round cap"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt(big_blind: Turn) -> Mirror {
        let mut mirror = Mirror::default();
        mirror.apply(&Event::Start { stack: 1000 }).unwrap();
        mirror
            .apply(&Event::Round {
                hole: Hole::try_from("As Ks").unwrap(),
                stacks: (1000, 1000),
                big_blind,
                small_blind: 10,
            })
            .unwrap();
        mirror
            .apply(&Event::Street {
                street: Street::Pref,
                board: Hand::empty(),
            })
            .unwrap();
        mirror
    }

    fn act(mirror: &mut Mirror, actor: Turn, action: Action, bet: Chips) {
        mirror.apply(&Event::Act { actor, action, bet }).unwrap();
    }

    #[test]
    fn big_blind_counts_as_street_raise() {
        let mirror = dealt(Turn::Villain);
        let state = mirror.snapshot();
        assert_eq!(state.street_raises, 3);
        assert_eq!(state.hero_raises, 4);
        assert_eq!(state.villain_raises, 4);
        assert_eq!((state.hero_bet, state.villain_bet), (10, 20));
        assert_eq!((state.hero_stack, state.villain_stack), (990, 980));
        assert!(mirror.first());
        assert!(!mirror.big_blind());
    }

    #[test]
    fn raises_spend_budgets() {
        let mut mirror = dealt(Turn::Villain);
        act(&mut mirror, Turn::Hero, Action::Raise(20), 40);
        act(&mut mirror, Turn::Villain, Action::Raise(20), 60);
        let state = mirror.snapshot();
        assert_eq!(state.street_raises, 1);
        assert_eq!(state.hero_raises, 3);
        assert_eq!(state.villain_raises, 3);
        assert_eq!(state.villain_stack, 940);
        assert!(!mirror.first());
    }

    #[test]
    fn repeated_action_dropped() {
        let mut mirror = dealt(Turn::Villain);
        act(&mut mirror, Turn::Hero, Action::Raise(20), 40);
        act(&mut mirror, Turn::Hero, Action::Raise(20), 40);
        assert_eq!(mirror.snapshot().street_raises, 2);
        assert_eq!(mirror.snapshot().hero_raises, 3);
    }

    #[test]
    fn streets_reset_and_record_levels() {
        let mut mirror = dealt(Turn::Hero);
        act(&mut mirror, Turn::Villain, Action::Call, 20);
        act(&mut mirror, Turn::Hero, Action::Call, 20);
        mirror
            .apply(&Event::Street {
                street: Street::Flop,
                board: Hand::try_from("2c 7d Th").unwrap(),
            })
            .unwrap();
        assert_eq!(mirror.snapshot().street_raises, 4);
        assert!(mirror.first());
        act(&mut mirror, Turn::Hero, Action::Call, 20);
        act(&mut mirror, Turn::Villain, Action::Raise(20), 40);
        act(&mut mirror, Turn::Hero, Action::Call, 40);
        mirror
            .apply(&Event::Result {
                winner: Some(Turn::Villain),
                stacks: (960, 1040),
            })
            .unwrap();
        let outcome = mirror.outcome().unwrap();
        assert!(!outcome.won);
        assert!(outcome.big_blind);
        assert_eq!(outcome.levels, vec![20]);
        assert_eq!(outcome.raises, [0, 1, 0, 0]);
        assert_eq!(outcome.bet, 40);
        assert_eq!(outcome.folded, None);
    }

    #[test]
    fn fold_is_remembered() {
        let mut mirror = dealt(Turn::Villain);
        act(&mut mirror, Turn::Hero, Action::Fold, 10);
        mirror
            .apply(&Event::Result {
                winner: Some(Turn::Villain),
                stacks: (990, 1010),
            })
            .unwrap();
        let outcome = mirror.outcome().unwrap();
        assert!(outcome.hero_folded());
        assert_eq!(outcome.bet, 10);
    }

    #[test]
    fn rejects_inconsistent_feed() {
        let mut mirror = dealt(Turn::Villain);
        let skipped = Event::Street {
            street: Street::Turn,
            board: Hand::try_from("2c 7d Th 4s").unwrap(),
        };
        assert!(mirror.apply(&skipped).is_err());
        let shrink = Event::Act {
            actor: Turn::Villain,
            action: Action::Call,
            bet: 5,
        };
        assert!(mirror.apply(&shrink).is_err());
        assert!(Mirror::default().observation().is_err());
    }
}
