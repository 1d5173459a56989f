use crate::cards::Street;

/// Key of the win/loss record.
///
/// Counts hands by whether the hero won, whether the hero posted the
/// forced bet, the street, and how many raises the villain had made by
/// the end of that street.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tally {
    pub won: bool,
    pub big_blind: bool,
    pub street: Street,
    pub raises: u8,
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} k={}",
            if self.won { "won" } else { "lost" },
            if self.big_blind { "bb" } else { "sb" },
            self.street,
            self.raises
        )
    }
}
