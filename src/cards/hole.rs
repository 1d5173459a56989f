use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// Both cards, lower index first.
    pub fn cards(&self) -> (Card, Card) {
        let mut hand = self.0;
        match (hand.next(), hand.next()) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => unreachable!("hole always holds two cards"),
        }
    }
    /// Same suit on both cards.
    pub fn suited(&self) -> bool {
        let (a, b) = self.cards();
        a.suit() == b.suit()
    }
    /// Ranks as (lower, higher). Pairs return the same rank twice.
    pub fn ranks(&self) -> (Rank, Rank) {
        let (a, b) = self.cards();
        (a.rank().min(b.rank()), a.rank().max(b.rank()))
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

impl TryFrom<Hand> for Hole {
    type Error = anyhow::Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        anyhow::ensure!(hand.size() == 2, "hole needs two cards, got {}", hand);
        Ok(Self(hand))
    }
}

impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}
