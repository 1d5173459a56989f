use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// Deck extends much of Hand functionality, with ability to remove cards from itself.
/// Random selection via ::draw(), or with a caller-owned RNG via ::draw_with().
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from((1u64 << 52) - 1))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a random card from the deck
    pub fn draw(&mut self) -> Card {
        self.draw_with(&mut rand::rng())
    }

    /// remove a random card from the deck using the supplied generator
    pub fn draw_with<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.0.size() > 0, "drawing from an empty deck");
        let i = rng.random_range(0..self.0.size());
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.remove(card);
        card
    }

    /// remove two cards from the deck
    /// to deal as a Hole
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
}
