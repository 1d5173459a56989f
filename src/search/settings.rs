use crate::EQUITY_TRIALS;
use crate::Probability;
use crate::TENDENCY_WEIGHT;
use crate::WARMUP_HANDS;

/// Run-time tunables of the decision engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Blend weight β of the opponent-tendency heuristic.
    pub weight: Probability,
    /// Hands recorded before learned statistics are consulted.
    pub warmup: usize,
    /// Monte Carlo trials per postflop equity estimate.
    pub trials: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weight: TENDENCY_WEIGHT,
            warmup: WARMUP_HANDS,
            trials: EQUITY_TRIALS,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.weight),
            "tendency weight {} outside [0, 1]",
            self.weight
        );
        anyhow::ensure!(self.trials > 0, "equity needs at least one trial");
        Ok(())
    }
}
