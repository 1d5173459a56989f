use crate::Chips;
use crate::Utility;
use crate::cards::Street;

/// Fixed raise increment per street.
///
/// The table this engine was tuned against raises 20/20/40/40 rather than
/// a uniform small bet, and the learned statistics assume that schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule([Chips; crate::N_STREETS]);

/// The schedule in force for every hand.
pub const SCHEDULE: Schedule = Schedule([
    crate::RAISE_PREFLOP,
    crate::RAISE_FLOP,
    crate::RAISE_TURN,
    crate::RAISE_RIVER,
]);

impl Schedule {
    /// Raise increment on a street.
    pub const fn increment(&self, street: Street) -> Chips {
        self.0[street.index()]
    }
    /// Arithmetic mean of the increments on the streets after this one.
    /// Zero on the river, where nothing remains.
    pub fn mean_after(&self, street: Street) -> Utility {
        match street.n_remaining() {
            0 => 0.0,
            n => self.0[street.index() + 1..].iter().sum::<Chips>() as Utility / n as Utility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments() {
        assert_eq!(SCHEDULE.increment(Street::Pref), 20);
        assert_eq!(SCHEDULE.increment(Street::Flop), 20);
        assert_eq!(SCHEDULE.increment(Street::Turn), 40);
        assert_eq!(SCHEDULE.increment(Street::Rive), 40);
    }

    #[test]
    fn remaining_means() {
        assert!((SCHEDULE.mean_after(Street::Pref) - 100.0 / 3.0).abs() < 1e-4);
        assert_eq!(SCHEDULE.mean_after(Street::Flop), 40.0);
        assert_eq!(SCHEDULE.mean_after(Street::Turn), 40.0);
        assert_eq!(SCHEDULE.mean_after(Street::Rive), 0.0);
    }
}
