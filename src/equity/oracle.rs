use crate::Probability;
use crate::cards::Observation;

/// Source of postflop win probabilities.
///
/// Anything that can turn a pocket, a board and a trial budget into a
/// probability of winning heads-up. Implementations may fail; the caller
/// never guesses a value in their place.
pub trait Equity {
    fn estimate(&self, observation: &Observation, trials: usize) -> anyhow::Result<Probability>;
}

impl<E: Equity + ?Sized> Equity for &E {
    fn estimate(&self, observation: &Observation, trials: usize) -> anyhow::Result<Probability> {
        (**self).estimate(observation, trials)
    }
}

impl<E: Equity + ?Sized> Equity for Box<E> {
    fn estimate(&self, observation: &Observation, trials: usize) -> anyhow::Result<Probability> {
        (**self).estimate(observation, trials)
    }
}
