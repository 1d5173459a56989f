use crate::Chips;
use crate::N;

/// Tally of a finished match, seat 0 first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub hands: usize,
    pub stacks: [Chips; N],
    pub wins: [usize; N],
    pub folds: [usize; N],
    pub splits: usize,
}

impl Summary {
    /// Chips won per hand by seat 0.
    pub fn rate(&self) -> f32 {
        match self.hands {
            0 => 0.,
            n => (self.stacks[0] - crate::STACK) as f32 / n as f32,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hands | stacks {} / {} | wins {} / {} | folds {} / {} | splits {} | {:+.2} per hand",
            self.hands,
            self.stacks[0],
            self.stacks[1],
            self.wins[0],
            self.wins[1],
            self.folds[0],
            self.folds[1],
            self.splits,
            self.rate(),
        )
    }
}
