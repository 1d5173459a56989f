use crate::Chips;
use crate::N_STREETS;
use crate::RAISES_PER_ROUND;
use crate::betting::Turn;

/// What the learning store needs to know about one completed hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Hero took the pot outright. A split counts as not won.
    pub won: bool,
    /// Side that folded, if the hand ended without a showdown.
    pub folded: Option<Turn>,
    /// Hero posted the big blind this hand.
    pub big_blind: bool,
    /// Raises the villain made on each street.
    pub raises: [u8; N_STREETS],
    /// Hero's bet at the end of each street that was completed,
    /// preflop first. Never longer than three.
    pub levels: Vec<Chips>,
    /// Hero's total bet when the hand ended.
    pub bet: Chips,
}

impl Outcome {
    /// Villain raises made by the end of each street.
    pub fn cumulative(&self) -> [u8; N_STREETS] {
        let mut total = 0;
        let mut sums = [0; N_STREETS];
        for (sum, raises) in sums.iter_mut().zip(self.raises) {
            total += raises;
            *sum = total;
        }
        assert!(total <= RAISES_PER_ROUND, "villain raised {} times", total);
        sums
    }
    pub fn hero_folded(&self) -> bool {
        self.folded == Some(Turn::Hero)
    }
    pub fn ended_by_fold(&self) -> bool {
        self.folded.is_some()
    }
}
