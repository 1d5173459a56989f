use super::decision::Decision;
use super::valuation::Valuation;
use crate::Utility;
use crate::betting::Action;
use crate::betting::RaiseCapState;
use crate::betting::SCHEDULE;
use crate::betting::Turn;

/// Alpha-beta search over the betting left on the current street.
///
/// Values are hero-relative chips. The hero maximises, the villain
/// minimises. A fold is terminal, a call closes the street and is scored
/// by the [`Valuation`], and a raise hands the turn over. The one
/// exception is the opening call of a street, which passes action to the
/// villain instead of closing anything.
///
/// Raise caps bound the depth, so every search terminates: at most
/// [`crate::RAISES_PER_STREET`] raises separate the root from a leaf.
pub struct Search<'a> {
    valuation: Valuation<'a>,
}

impl<'a> From<Valuation<'a>> for Search<'a> {
    fn from(valuation: Valuation<'a>) -> Self {
        Self { valuation }
    }
}

impl<'a> Search<'a> {
    pub fn valuation(&self) -> &Valuation<'a> {
        &self.valuation
    }

    /// Best hero action from `state`; `first` marks the opening decision of a street.
    pub fn choose(&self, state: &RaiseCapState, first: bool) -> Action {
        self.decide(state, first).action
    }

    /// Each root alternative is searched with an open window so that ties
    /// compare exact values. Ties go to the later of Fold, Call, Raise.
    pub fn decide(&self, state: &RaiseCapState, first: bool) -> Decision {
        state.check();
        let fold = state.folding(Turn::Hero);
        let call = match first {
            true => self.minimax(Turn::Villain, &state.call(Turn::Hero), -Utility::INFINITY, Utility::INFINITY),
            false => self.valuation.settle(&state.call(Turn::Hero)),
        };
        let raise = match state.can_raise(Turn::Hero) {
            true => {
                let amount = state.raise_size(Turn::Hero, &SCHEDULE);
                let child = state.raise(Turn::Hero, amount);
                let value = self.minimax(Turn::Villain, &child, -Utility::INFINITY, Utility::INFINITY);
                Some((amount, value))
            }
            false => None,
        };
        let mut best = (Action::Fold, fold);
        if call >= best.1 {
            best = (Action::Call, call);
        }
        if let Some((amount, value)) = raise {
            if value >= best.1 {
                best = (Action::Raise(amount), value);
            }
        }
        let decision = Decision {
            state: *state,
            action: best.0,
            value: best.1,
            fold,
            call,
            raise: raise.map(|(_, value)| value),
        };
        log::debug!("{} -> {}", state, decision);
        decision
    }

    /// Value of `state` with `turn` to act, within the (alpha, beta) window.
    pub fn minimax(&self, turn: Turn, state: &RaiseCapState, alpha: Utility, beta: Utility) -> Utility {
        match turn {
            Turn::Hero => self.maximize(state, alpha, beta),
            Turn::Villain => self.minimize(state, alpha, beta),
        }
    }

    fn maximize(&self, state: &RaiseCapState, alpha: Utility, beta: Utility) -> Utility {
        let mut best = state.folding(Turn::Hero);
        if best >= beta {
            return best;
        }
        best = best.max(self.valuation.settle(&state.call(Turn::Hero)));
        if best >= beta {
            return best;
        }
        if state.can_raise(Turn::Hero) {
            let amount = state.raise_size(Turn::Hero, &SCHEDULE);
            let child = state.raise(Turn::Hero, amount);
            best = best.max(self.minimax(Turn::Villain, &child, alpha.max(best), beta));
        }
        best
    }

    fn minimize(&self, state: &RaiseCapState, alpha: Utility, beta: Utility) -> Utility {
        let mut best = state.folding(Turn::Villain);
        if best <= alpha {
            return best;
        }
        best = best.min(self.valuation.settle(&state.call(Turn::Villain)));
        if best <= alpha {
            return best;
        }
        if state.can_raise(Turn::Villain) {
            let amount = state.raise_size(Turn::Villain, &SCHEDULE);
            let child = state.raise(Turn::Villain, amount);
            best = best.min(self.minimax(Turn::Hero, &child, alpha, beta.min(best)));
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;
    use crate::RAISES_PER_ROUND;
    use crate::RAISES_PER_STREET;
    use crate::cards::Street;
    use crate::learning::Memory;
    use crate::learning::Outcome;
    use crate::search::Settings;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Plain minimax without pruning.
    fn exhaustive(search: &Search, turn: Turn, state: &RaiseCapState) -> Utility {
        let fold = state.folding(turn);
        let call = search.valuation().settle(&state.call(turn));
        let raise = match state.can_raise(turn) {
            true => {
                let amount = state.raise_size(turn, &SCHEDULE);
                Some(exhaustive(search, turn.other(), &state.raise(turn, amount)))
            }
            false => None,
        };
        let values = std::iter::once(fold).chain(std::iter::once(call)).chain(raise);
        match turn {
            Turn::Hero => values.fold(Utility::NEG_INFINITY, Utility::max),
            Turn::Villain => values.fold(Utility::INFINITY, Utility::min),
        }
    }

    /// Every state reachable from `state` with `turn` to act.
    fn reachable(turn: Turn, state: &RaiseCapState, into: &mut Vec<RaiseCapState>) {
        into.push(*state);
        into.push(state.call(turn));
        if state.can_raise(turn) {
            let amount = state.raise_size(turn, &SCHEDULE);
            reachable(turn.other(), &state.raise(turn, amount), into);
        }
    }

    fn random_state(rng: &mut SmallRng) -> RaiseCapState {
        let street = Street::all()[rng.random_range(0..4)];
        let hero_bet: Chips = rng.random_range(0..300);
        let villain_bet = hero_bet + rng.random_range(0..=80);
        let owed = villain_bet - hero_bet;
        RaiseCapState {
            street,
            street_raises: rng.random_range(0..=RAISES_PER_STREET),
            hero_raises: rng.random_range(0..=RAISES_PER_ROUND),
            villain_raises: rng.random_range(0..=RAISES_PER_ROUND),
            hero_bet,
            villain_bet,
            hero_stack: owed + rng.random_range(0..400),
            villain_stack: rng.random_range(0..400),
        }
    }

    fn seasoned() -> Memory {
        let mut memory = Memory::default();
        for i in 0..150u32 {
            memory.record(&Outcome {
                won: i % 3 != 0,
                folded: None,
                big_blind: i % 2 == 0,
                raises: [(i % 3) as u8, 0, (i % 2) as u8, 0],
                levels: vec![20 + 20 * (i % 4) as Chips, 80, 160],
                bet: 100 + (i % 7) as Chips * 20,
            });
        }
        memory
    }

    fn flop() -> RaiseCapState {
        RaiseCapState {
            street: Street::Flop,
            street_raises: 4,
            hero_raises: 4,
            villain_raises: 4,
            hero_bet: 20,
            villain_bet: 20,
            hero_stack: 980,
            villain_stack: 980,
        }
    }

    #[test]
    fn pruning_matches_exhaustive() {
        let mut rng = SmallRng::seed_from_u64(42);
        let memory = seasoned();
        for weight in [0.0, 0.5] {
            let settings = Settings {
                weight,
                ..Settings::default()
            };
            for _ in 0..2000 {
                let state = random_state(&mut rng);
                let p = rng.random_range(0.0..=1.0);
                let search = Search::from(Valuation::new(state.street, p, &memory, &settings));
                for turn in [Turn::Hero, Turn::Villain] {
                    if state.to_call(turn) > state.stack(turn) {
                        continue;
                    }
                    let pruned = search.minimax(turn, &state, -Utility::INFINITY, Utility::INFINITY);
                    assert_eq!(pruned, exhaustive(&search, turn, &state), "{}", state);
                }
            }
        }
    }

    #[test]
    fn root_values_are_exact() {
        let mut rng = SmallRng::seed_from_u64(7);
        let memory = Memory::default();
        let settings = Settings::default();
        for _ in 0..1000 {
            let state = random_state(&mut rng);
            let p = rng.random_range(0.0..=1.0);
            let search = Search::from(Valuation::new(state.street, p, &memory, &settings));
            let decision = search.decide(&state, false);
            let best = [Some(decision.fold), Some(decision.call), decision.raise]
                .into_iter()
                .flatten()
                .fold(Utility::NEG_INFINITY, Utility::max);
            assert_eq!(decision.value, best);
            if let Action::Raise(amount) = decision.action {
                assert!(state.can_raise(Turn::Hero));
                assert_eq!(amount, state.raise_size(Turn::Hero, &SCHEDULE));
                assert!(decision.raise >= Some(decision.call));
            }
            if decision.action == Action::Fold {
                assert!(decision.fold > decision.call);
            }
        }
    }

    #[test]
    fn budgets_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..500 {
            let state = random_state(&mut rng);
            let mut states = Vec::new();
            reachable(Turn::Hero, &state, &mut states);
            for s in states {
                assert!(s.street_raises <= RAISES_PER_STREET);
                assert!(s.hero_raises <= state.hero_raises);
                assert!(s.villain_raises <= state.villain_raises);
                assert!(s.hero_stack >= 0 && s.villain_stack >= 0);
                assert_eq!(
                    s.hero_bet + s.hero_stack + s.villain_bet + s.villain_stack,
                    state.hero_bet + state.hero_stack + state.villain_bet + state.villain_stack
                );
            }
        }
    }

    #[test]
    fn no_raise_without_street_budget() {
        let memory = Memory::default();
        let settings = Settings::default();
        let capped = RaiseCapState {
            street_raises: 0,
            ..flop()
        };
        let search = Search::from(Valuation::new(Street::Flop, 1.0, &memory, &settings));
        let decision = search.decide(&capped, true);
        assert_eq!(decision.raise, None);
        assert_eq!(decision.action, Action::Call);
    }

    #[test]
    fn strong_hand_raises() {
        let memory = Memory::default();
        let settings = Settings::default();
        let search = Search::from(Valuation::new(Street::Rive, 0.95, &memory, &settings));
        let state = RaiseCapState {
            street: Street::Rive,
            ..flop()
        };
        assert_eq!(search.choose(&state, true), Action::Raise(40));
    }

    #[test]
    fn hopeless_hand_folds_to_a_raise() {
        let memory = Memory::default();
        let settings = Settings::default();
        let search = Search::from(Valuation::new(Street::Rive, 0.0, &memory, &settings));
        let state = RaiseCapState {
            street: Street::Rive,
            street_raises: 3,
            villain_raises: 3,
            villain_bet: 60,
            villain_stack: 940,
            ..flop()
        };
        assert_eq!(search.choose(&state, false), Action::Fold);
    }

    #[test]
    fn coin_flip_ties_prefer_raise() {
        let memory = Memory::default();
        let settings = Settings::default();
        let search = Search::from(Valuation::new(Street::Rive, 0.5, &memory, &settings));
        let state = RaiseCapState {
            street: Street::Rive,
            ..flop()
        };
        let decision = search.decide(&state, true);
        assert_eq!(decision.call, 0.0);
        assert_eq!(decision.raise, Some(0.0));
        assert_eq!(decision.action, Action::Raise(40));
    }

    #[test]
    fn short_stack_raises_all_in() {
        let memory = Memory::default();
        let settings = Settings::default();
        let search = Search::from(Valuation::new(Street::Rive, 1.0, &memory, &settings));
        let state = RaiseCapState {
            street: Street::Rive,
            hero_stack: 25,
            ..flop()
        };
        assert_eq!(search.choose(&state, true), Action::Raise(25));
    }
}
