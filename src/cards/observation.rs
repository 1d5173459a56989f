use super::deck::Deck;
use super::hand::Hand;
use super::hole::Hole;
use super::street::Street;
use crate::Arbitrary;

/// What one player can see: their pocket cards and the public board.
///
/// This is the whole input of the equity oracle. The street is implied by
/// the board size, so an observation can never disagree with itself.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub struct Observation {
    pocket: Hand,
    public: Hand,
}

impl Observation {
    pub fn street(&self) -> Street {
        Street::try_from(self.public.size()).expect("public size validated on construction")
    }
    pub fn pocket(&self) -> &Hand {
        &self.pocket
    }
    pub fn public(&self) -> &Hand {
        &self.public
    }
    /// Cards neither in the pocket nor on the board.
    pub fn deck(&self) -> Deck {
        Deck::from(Hand::from(*self).complement())
    }
}

/// assemble Observation from private + public cards
impl TryFrom<(Hole, Hand)> for Observation {
    type Error = anyhow::Error;
    fn try_from((hole, public): (Hole, Hand)) -> Result<Self, Self::Error> {
        let pocket = Hand::from(hole);
        Street::try_from(public.size())?;
        anyhow::ensure!(
            u64::from(pocket) & u64::from(public) == 0,
            "board {} overlaps hole {}",
            public,
            pocket
        );
        Ok(Self { pocket, public })
    }
}

/// coalesce public + private cards into single Hand
impl From<Observation> for Hand {
    fn from(observation: Observation) -> Self {
        Hand::add(observation.pocket, observation.public)
    }
}

/// "As Ks ~ 2c 7d Th"
impl TryFrom<&str> for Observation {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (pocket, public) = s.split_once('~').unwrap_or((s, ""));
        Self::try_from((Hole::try_from(pocket)?, Hand::try_from(public)?))
    }
}

/// Generate a random observation for a random street
impl Arbitrary for Observation {
    fn random() -> Self {
        let mut deck = Deck::new();
        let hole = deck.hole();
        let public = (0..Street::random().n_public())
            .map(|_| deck.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add);
        Self {
            pocket: Hand::from(hole),
            public,
        }
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.pocket, self.public)
    }
}
