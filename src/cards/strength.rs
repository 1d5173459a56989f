use super::rank::Rank;

/// Hand category with its defining ranks.
///
/// Variant order is the showdown order, so the derived `Ord` compares
/// categories first and defining ranks second.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers (remaining flush cards)
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::TwoPair(..) | Ranking::FourOAK(_) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(..) | Ranking::StraightFlush(_) => 0,
        }
    }
}

/// Tie-breaking ranks as a 13-bit mask.
///
/// Two masks with the same popcount compare like their ranks read from
/// the top down, which is exactly the kicker rule.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
pub struct Kickers(u16);

impl From<u16> for Kickers {
    fn from(mask: u16) -> Self {
        Self(mask)
    }
}
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

/// A hand's showdown value: category, then kickers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kickers
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Evaluator::from(hand).strength()
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.ranking)
    }
}

use super::evaluator::Evaluator;
use super::hand::Hand;
