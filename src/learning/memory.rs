use super::level::Level;
use super::outcome::Outcome;
use super::tally::Tally;
use crate::Chips;
use crate::Probability;
use crate::Utility;
use crate::cards::Street;
use std::collections::HashMap;

/// Online statistics about the opponent, accumulated hand by hand.
///
/// Three tables, all monotone:
/// - win/loss counts keyed by [`Tally`]
/// - win rates per (street, villain raises), derived from the counts
/// - final-bet means per (street, end-of-street bet level)
///
/// Only [`Memory::record`] mutates, and it takes `&mut self`, so the
/// search always reads a settled snapshot.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    hands: usize,
    tallies: HashMap<Tally, usize>,
    rates: HashMap<(Street, u8), Probability>,
    levels: HashMap<(Street, Chips), Level>,
}

impl Memory {
    /// Completed hands recorded so far, folds included.
    pub fn hands(&self) -> usize {
        self.hands
    }
    /// Learned chance of winning given villain raises by the end of a
    /// street. `None` until a hand has touched the cell.
    pub fn win_rate(&self, street: Street, raises: u8) -> Option<Probability> {
        self.rates.get(&(street, raises)).copied()
    }
    /// Mean final bet of hands that left `street` at `bet`.
    pub fn bet_level(&self, street: Street, bet: Chips) -> Option<Utility> {
        self.levels.get(&(street, bet)).map(Level::mean)
    }
    pub fn level(&self, street: Street, bet: Chips) -> Option<&Level> {
        self.levels.get(&(street, bet))
    }
    pub fn tally(&self, tally: &Tally) -> usize {
        self.tallies.get(tally).copied().unwrap_or(0)
    }

    /// Fold one completed hand into every table.
    pub fn record(&mut self, outcome: &Outcome) {
        self.hands += 1;
        if !outcome.ended_by_fold() {
            self.witness_levels(outcome);
        }
        if !outcome.hero_folded() {
            self.witness_raises(outcome);
        }
        log::debug!(
            "recorded hand {:>5} won {:<5} folded {:?} raises {:?}",
            self.hands,
            outcome.won,
            outcome.folded,
            outcome.raises
        );
    }

    fn witness_levels(&mut self, outcome: &Outcome) {
        assert!(outcome.levels.len() < crate::N_STREETS, "too many street levels");
        for (street, bet) in Street::all().into_iter().zip(outcome.levels.iter()) {
            self.levels
                .entry((street, *bet))
                .or_default()
                .witness(outcome.bet);
        }
    }

    fn witness_raises(&mut self, outcome: &Outcome) {
        let cumulative = outcome.cumulative();
        for (street, raises) in Street::all().into_iter().zip(cumulative) {
            let tally = Tally {
                won: outcome.won,
                big_blind: outcome.big_blind,
                street,
                raises,
            };
            *self.tallies.entry(tally).or_default() += 1;
        }
        for (street, raises) in Street::all().into_iter().zip(cumulative) {
            match self.rate(outcome.big_blind, street, raises) {
                Some(p) => self.rates.insert((street, raises), p),
                None => self.rates.remove(&(street, raises)),
            };
        }
    }

    /// count(won, role, street, k) / count(any, role, street, k),
    /// undefined when the role has no hands on the street or the cell is empty.
    fn rate(&self, big_blind: bool, street: Street, raises: u8) -> Option<Probability> {
        let marginal = self
            .tallies
            .iter()
            .filter(|(t, _)| t.big_blind == big_blind && t.street == street)
            .map(|(_, n)| n)
            .sum::<usize>();
        let key = |won| Tally {
            won,
            big_blind,
            street,
            raises,
        };
        let won = self.tally(&key(true));
        let cell = won + self.tally(&key(false));
        match (marginal, cell) {
            (0, _) | (_, 0) => None,
            _ => Some(won as Probability / cell as Probability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::betting::Turn;

    fn showdown(won: bool, big_blind: bool, raises: [u8; 4]) -> Outcome {
        Outcome {
            won,
            folded: None,
            big_blind,
            raises,
            levels: vec![20, 40, 80],
            bet: 120,
        }
    }

    #[test]
    fn empty_store_is_undefined() {
        let memory = Memory::default();
        assert_eq!(memory.hands(), 0);
        for street in Street::all() {
            for k in 0..=4 {
                assert_eq!(memory.win_rate(street, k), None);
            }
        }
        assert_eq!(memory.bet_level(Street::Pref, 20), None);
    }

    #[test]
    fn win_rate_is_won_over_total() {
        let mut memory = Memory::default();
        for _ in 0..3 {
            memory.record(&showdown(true, false, [0, 1, 0, 0]));
        }
        memory.record(&showdown(false, false, [0, 1, 0, 0]));
        assert_eq!(memory.win_rate(Street::Pref, 0), Some(0.75));
        assert_eq!(memory.win_rate(Street::Flop, 1), Some(0.75));
        assert_eq!(memory.win_rate(Street::Rive, 1), Some(0.75));
        assert_eq!(memory.win_rate(Street::Flop, 0), None);
        assert_eq!(memory.hands(), 4);
    }

    #[test]
    fn win_rate_query_is_idempotent() {
        let mut memory = Memory::default();
        memory.record(&showdown(true, true, [1, 0, 0, 0]));
        memory.record(&showdown(false, true, [2, 0, 0, 0]));
        let first = memory.win_rate(Street::Turn, 1);
        assert_eq!(first, memory.win_rate(Street::Turn, 1));
        assert_eq!(first, Some(1.0));
        assert_eq!(memory.win_rate(Street::Turn, 2), Some(0.0));
    }

    #[test]
    fn rates_follow_latest_role() {
        let mut memory = Memory::default();
        memory.record(&showdown(true, true, [0; 4]));
        memory.record(&showdown(false, false, [0; 4]));
        assert_eq!(memory.win_rate(Street::Pref, 0), Some(0.0));
        memory.record(&showdown(true, true, [0; 4]));
        assert_eq!(memory.win_rate(Street::Pref, 0), Some(1.0));
    }

    #[test]
    fn bet_levels_average_final_bet() {
        let mut memory = Memory::default();
        memory.record(&showdown(true, false, [0; 4]));
        memory.record(&Outcome {
            bet: 200,
            ..showdown(false, false, [0; 4])
        });
        assert_eq!(memory.bet_level(Street::Pref, 20), Some(160.0));
        assert_eq!(memory.bet_level(Street::Flop, 40), Some(160.0));
        assert_eq!(memory.bet_level(Street::Turn, 80), Some(160.0));
        assert_eq!(memory.bet_level(Street::Rive, 120), None);
        assert_eq!(memory.level(Street::Pref, 20).map(Level::count), Some(2));
    }

    #[test]
    fn hero_fold_leaves_tables_unchanged() {
        let mut memory = Memory::default();
        memory.record(&showdown(true, false, [1, 0, 0, 0]));
        let rates = memory.rates.clone();
        let levels = memory.levels.clone();
        let tallies = memory.tallies.clone();
        memory.record(&Outcome {
            won: false,
            folded: Some(Turn::Hero),
            big_blind: false,
            raises: [1, 1, 0, 0],
            levels: vec![40],
            bet: 60,
        });
        assert_eq!(memory.rates, rates);
        assert_eq!(memory.levels, levels);
        assert_eq!(memory.tallies, tallies);
        assert_eq!(memory.hands(), 2);
    }

    #[test]
    fn villain_fold_counts_win_but_not_levels() {
        let mut memory = Memory::default();
        memory.record(&Outcome {
            won: true,
            folded: Some(Turn::Villain),
            big_blind: true,
            raises: [0, 0, 0, 0],
            levels: vec![20],
            bet: 40,
        });
        assert_eq!(memory.win_rate(Street::Flop, 0), Some(1.0));
        assert_eq!(memory.bet_level(Street::Pref, 20), None);
    }
}
