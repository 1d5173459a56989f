use crate::Chips;
use crate::Utility;

/// Running mean of the final bet observed after passing one bet level.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Level {
    count: usize,
    total: Chips,
}

impl Level {
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn total(&self) -> Chips {
        self.total
    }
    pub fn mean(&self) -> Utility {
        assert!(self.count > 0, "mean of an empty level");
        self.total as Utility / self.count as Utility
    }
    pub fn witness(&mut self, bet: Chips) {
        self.count += 1;
        self.total += bet;
    }
}
