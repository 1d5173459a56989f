/// A single playing card.
///
/// Cards index into a 52-slot deck as `rank * 4 + suit`, so a set of
/// cards packs into the low 52 bits of a `u64` (see [`Hand`]).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 injection
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism, e.g. "As" or "Td"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| anyhow::anyhow!("empty card str"))?;
        let (rank, suit) = s.split_at(split);
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}


use super::rank::Rank;
use super::suit::Suit;
use std::fmt::{Display, Formatter};
