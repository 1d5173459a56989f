use super::event::Event;
use super::player::Player;
use crate::betting::Action;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Sparring partner that picks among legal actions at random,
/// leaning heavily towards calling.
#[derive(Debug, Clone, Copy)]
pub struct Robot {
    fold: u32,
    call: u32,
    raise: u32,
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            fold: 1500,
            call: 4000,
            raise: 500,
        }
    }
}

impl Robot {
    /// Custom weights. At least one must be positive.
    pub fn weighted(fold: u32, call: u32, raise: u32) -> Self {
        Self { fold, call, raise }
    }
    fn weight(&self, action: &Action) -> u32 {
        match action {
            Action::Fold => self.fold,
            Action::Call => self.call,
            Action::Raise(_) => self.raise,
        }
    }
}

impl Player for Robot {
    fn decide(&mut self, legal: &[Action]) -> anyhow::Result<Action> {
        let weights = legal.iter().map(|a| self.weight(a)).collect::<Vec<_>>();
        let distribution = WeightedIndex::new(&weights)?;
        Ok(legal[distribution.sample(&mut rand::rng())])
    }
    fn notify(&mut self, _: &Event) -> anyhow::Result<()> {
        Ok(())
    }
}
