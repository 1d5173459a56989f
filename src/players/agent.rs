use super::event::Event;
use super::mirror::Mirror;
use super::player::Player;
use crate::Probability;
use crate::betting::Action;
use crate::equity::Equity;
use crate::equity::Estimator;
use crate::learning::Memory;
use crate::search::Decision;
use crate::search::Search;
use crate::search::Settings;
use crate::search::Valuation;

/// The decision engine seated at a table.
///
/// Keeps a [`Mirror`] of the hand, estimates hand strength once per street,
/// searches the street's betting tree on every decision, and records each
/// finished hand into its [`Memory`].
pub struct Agent<E: Equity> {
    estimator: Estimator<E>,
    settings: Settings,
    memory: Memory,
    mirror: Mirror,
    probability: Probability,
}

impl<E: Equity> Agent<E> {
    pub fn new(oracle: E, settings: Settings) -> Self {
        Self {
            estimator: Estimator::new(oracle, settings.trials),
            settings,
            memory: Memory::default(),
            mirror: Mirror::default(),
            probability: 0.5,
        }
    }
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// Win probability cached for the current street.
    pub fn probability(&self) -> Probability {
        self.probability
    }

    /// Full search result from the mirrored state.
    pub fn deliberate(&self) -> Decision {
        let valuation = Valuation::new(
            self.mirror.street(),
            self.probability,
            &self.memory,
            &self.settings,
        );
        Search::from(valuation).decide(&self.mirror.snapshot(), self.mirror.first())
    }
}

impl<E: Equity> Player for Agent<E> {
    fn decide(&mut self, legal: &[Action]) -> anyhow::Result<Action> {
        anyhow::ensure!(!legal.is_empty(), "no legal actions offered");
        let decision = self.deliberate();
        let action = match decision.action {
            chosen if legal.contains(&chosen) => chosen,
            Action::Raise(_) if legal.iter().any(Action::is_aggro) => legal
                .iter()
                .copied()
                .find(Action::is_aggro)
                .unwrap_or(Action::Call),
            Action::Raise(_) if legal.contains(&Action::Call) => Action::Call,
            chosen => {
                log::warn!("{} not offered among {:?}", chosen, legal);
                legal[0]
            }
        };
        log::debug!("{} p={:.3} {}", self.mirror.street(), self.probability, decision);
        Ok(action)
    }

    fn notify(&mut self, event: &Event) -> anyhow::Result<()> {
        self.mirror.apply(event)?;
        match event {
            Event::Street { .. } => {
                self.probability = self.estimator.estimate(&self.mirror.observation()?)?;
            }
            Event::Result { .. } => {
                let outcome = self.mirror.outcome()?;
                self.memory.record(&outcome);
            }
            _ => {}
        }
        Ok(())
    }
}
