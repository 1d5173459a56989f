use super::oracle::Equity;
use crate::Probability;
use crate::cards::Hand;
use crate::cards::Observation;
use crate::cards::Strength;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cmp::Ordering;

/// Sampled showdown equity against one random opponent.
///
/// Each trial deals the opponent two unseen cards, completes the board
/// from what is left, and scores a win as 1 and a split as ½.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonteCarlo {
    seed: Option<u64>,
}

impl MonteCarlo {
    /// Fixed seed, so repeated estimates of one observation agree.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Equity for MonteCarlo {
    fn estimate(&self, observation: &Observation, trials: usize) -> anyhow::Result<Probability> {
        anyhow::ensure!(trials > 0, "equity needs at least one trial");
        let ref mut rng = self.rng();
        let missing = 5 - observation.public().size();
        let points = (0..trials)
            .map(|_| {
                let mut deck = observation.deck();
                let villain = Hand::add(
                    Hand::from(deck.draw_with(rng)),
                    Hand::from(deck.draw_with(rng)),
                );
                let board = (0..missing)
                    .map(|_| deck.draw_with(rng))
                    .map(Hand::from)
                    .fold(*observation.public(), Hand::add);
                let hero = Strength::from(Hand::add(*observation.pocket(), board));
                let villain = Strength::from(Hand::add(villain, board));
                match hero.cmp(&villain) {
                    Ordering::Greater => 2,
                    Ordering::Equal => 1,
                    Ordering::Less => 0,
                }
            })
            .sum::<usize>();
        Ok(points as Probability / (2 * trials) as Probability)
    }
}
