use super::card::Card;
use super::suit::Suit;

/// An unordered set of cards packed into the low 52 bits of a `u64`.
///
/// Bit `i` is set iff the card with index `i` (see [`Card`]) is present.
/// Set algebra is a handful of bitwise ops and never allocates, which keeps
/// Monte Carlo rollouts cheap.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    /// Disjoint union. Overlapping hands are a dealing bug.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0, "overlapping hands {} {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// 13-bit mask of the ranks held in one suit.
    pub fn of(&self, suit: &Suit) -> u16 {
        let offset = u8::from(*suit);
        (0..13u8)
            .filter(|r| self.0 & (1 << (r * 4 + offset)) != 0)
            .fold(0u16, |mask, r| mask | 1 << r)
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards
            .into_iter()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

/// one-way conversion to u16 rank mask, suits discarded
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        Suit::all()
            .iter()
            .map(|suit| h.of(suit))
            .fold(0u16, |a, b| a | b)
    }
}

/// str isomorphism, e.g. "As Kd" or "AsKd"
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<Vec<char>>();
        let cards = chars
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Card::try_from(pair.as_str()))
            .collect::<anyhow::Result<Vec<Card>>>()?;
        let hand = cards
            .iter()
            .map(|card| u64::from(*card))
            .fold(Hand::empty(), |hand, bit| Hand(hand.0 | bit));
        anyhow::ensure!(hand.size() == cards.len(), "duplicate cards in {}", s);
        Ok(hand)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("2c").ok());
        assert_eq!(iter.next(), Card::try_from("Ts").ok());
        assert_eq!(iter.next(), Card::try_from("Jc").ok());
        assert_eq!(iter.next(), Card::try_from("Js").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(hand.of(&Suit::C), 0b_1000100010001);
        assert_eq!(hand.of(&Suit::D), 0b_0001000100010);
        assert_eq!(hand.of(&Suit::H), 0b_0010001000100);
        assert_eq!(hand.of(&Suit::S), 0b_0100010001000);
        assert_eq!(u16::from(hand), 0x1FFF);
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("As As").is_err());
        assert!(Hand::try_from("AsKd").unwrap().contains(&Card::from((Rank::King, Suit::D))));
    }

    #[test]
    fn complement_is_disjoint() {
        let hand = Hand::try_from("As Kd 7c").unwrap();
        assert_eq!(hand.complement().size(), 49);
        assert_eq!(Hand::add(hand, hand.complement()).size(), 52);
    }
}
