use super::oracle::Equity;
use super::preflop::Preflop;
use crate::Probability;
use crate::cards::Hole;
use crate::cards::Observation;
use crate::cards::Street;

/// Hand-strength estimator: static table preflop, oracle afterwards.
///
/// Every probability handed out is checked against [0, 1]; an oracle that
/// answers outside that range is reported as an error, never clamped.
#[derive(Debug, Clone)]
pub struct Estimator<E: Equity> {
    oracle: E,
    trials: usize,
}

impl<E: Equity> Estimator<E> {
    pub fn new(oracle: E, trials: usize) -> Self {
        Self { oracle, trials }
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn oracle(&self) -> &E {
        &self.oracle
    }

    /// Probability of winning at showdown from what the observation shows.
    pub fn estimate(&self, observation: &Observation) -> anyhow::Result<Probability> {
        let p = match observation.street() {
            Street::Pref => Preflop::probability(&Hole::try_from(*observation.pocket())?),
            _ => self.oracle.estimate(observation, self.trials)?,
        };
        anyhow::ensure!(
            (0.0..=1.0).contains(&p),
            "equity {} outside [0, 1] for {}",
            p,
            observation
        );
        log::trace!("{} equity {:.3}", observation, p);
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EQUITY_TRIALS;
    use crate::equity::MonteCarlo;

    struct Fixed(Probability);
    impl Equity for Fixed {
        fn estimate(&self, _: &Observation, _: usize) -> anyhow::Result<Probability> {
            Ok(self.0)
        }
    }

    struct Offline;
    impl Equity for Offline {
        fn estimate(&self, _: &Observation, _: usize) -> anyhow::Result<Probability> {
            Err(anyhow::anyhow!("oracle offline"))
        }
    }

    #[test]
    fn preflop_skips_oracle() {
        let estimator = Estimator::new(Offline, EQUITY_TRIALS);
        let obs = Observation::try_from("Ks As").unwrap();
        let p = estimator.estimate(&obs).unwrap();
        assert!((p - 0.67045).abs() < 1e-6);
    }

    #[test]
    fn postflop_uses_oracle() {
        let obs = Observation::try_from("Ks As ~ 2c 7d Th").unwrap();
        assert_eq!(Estimator::new(Fixed(0.25), 10).estimate(&obs).unwrap(), 0.25);
        assert!(Estimator::new(Offline, 10).estimate(&obs).is_err());
    }

    #[test]
    fn out_of_range_rejected() {
        let obs = Observation::try_from("Ks As ~ 2c 7d Th").unwrap();
        assert!(Estimator::new(Fixed(1.5), 10).estimate(&obs).is_err());
        assert!(Estimator::new(Fixed(-0.1), 10).estimate(&obs).is_err());
        assert!(Estimator::new(Fixed(f32::NAN), 10).estimate(&obs).is_err());
    }

    #[test]
    fn sampled_equity_in_range() {
        let estimator = Estimator::new(MonteCarlo::default(), EQUITY_TRIALS);
        let obs = Observation::try_from("Ks As ~ 2c 7d Th 4h").unwrap();
        let p = estimator.estimate(&obs).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }
}
