use super::settings::Settings;
use crate::Chips;
use crate::Probability;
use crate::RAISES_PER_ROUND;
use crate::RAISES_PER_STREET;
use crate::Utility;
use crate::betting::RaiseCapState;
use crate::betting::SCHEDULE;
use crate::cards::Street;
use crate::learning::Memory;

/// Continuation-value model for street-ending nodes.
///
/// The search never expands later streets. Instead, when a call closes
/// the current street, this model projects how large the hero's bet will
/// finally be and converts that into a hero-relative expected outcome.
///
/// Projection prefers what the store has seen: the mean final bet of past
/// hands that left this street at the same level. Before warm-up, or for a
/// level never seen, it extrapolates each side's raise rate so far over
/// the remaining streets.
///
/// The outcome is `projected × (2p − 1)`, optionally blended with the same
/// expression using the learned win rate for the villain's raise count.
#[derive(Debug, Clone, Copy)]
pub struct Valuation<'a> {
    street: Street,
    probability: Probability,
    memory: &'a Memory,
    settings: &'a Settings,
}

impl<'a> Valuation<'a> {
    pub fn new(
        street: Street,
        probability: Probability,
        memory: &'a Memory,
        settings: &'a Settings,
    ) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "win probability {} outside [0, 1]",
            probability
        );
        Self {
            street,
            probability,
            memory,
            settings,
        }
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn probability(&self) -> Probability {
        self.probability
    }

    /// Expected outcome once the street closes with both sides at `bet`.
    pub fn expected_outcome(
        &self,
        bet: Chips,
        hero_stack: Chips,
        villain_stack: Chips,
        hero_budget: u8,
        villain_budget: u8,
    ) -> Utility {
        let projected = self.project(bet, hero_stack, villain_stack, hero_budget, villain_budget);
        self.evaluate(projected, RAISES_PER_ROUND - villain_budget)
    }

    /// [`Self::expected_outcome`] of a state whose bets were just equalised.
    pub fn settle(&self, state: &RaiseCapState) -> Utility {
        assert!(state.hero_bet == state.villain_bet, "street closed unequal: {}", state);
        self.expected_outcome(
            state.hero_bet,
            state.hero_stack,
            state.villain_stack,
            state.hero_raises,
            state.villain_raises,
        )
    }

    /// Final bet the hand is expected to reach.
    pub fn project(
        &self,
        bet: Chips,
        hero_stack: Chips,
        villain_stack: Chips,
        hero_budget: u8,
        villain_budget: u8,
    ) -> Utility {
        if self.street == Street::Rive {
            return bet as Utility;
        }
        if self.warm() {
            if let Some(mean) = self.memory.bet_level(self.street, bet) {
                return mean;
            }
        }
        self.extrapolate(bet, hero_stack, villain_stack, hero_budget, villain_budget)
    }

    /// Closed-form projection from raise rates so far.
    pub fn extrapolate(
        &self,
        bet: Chips,
        hero_stack: Chips,
        villain_stack: Chips,
        hero_budget: u8,
        villain_budget: u8,
    ) -> Utility {
        let played = (self.street.index() + 1) as Utility;
        let remaining = self.street.n_remaining() as Utility;
        let increment = SCHEDULE.mean_after(self.street);
        let future = |budget: u8| {
            let used = (RAISES_PER_ROUND - budget) as Utility;
            (budget as Utility).min(used / played * remaining)
        };
        let increase = (hero_stack as Utility)
            .min(villain_stack as Utility)
            .min((future(hero_budget) + future(villain_budget)) * increment)
            .min(remaining * RAISES_PER_STREET as Utility * increment);
        bet as Utility + increase
    }

    /// Hero-relative value of reaching showdown for `projected` chips.
    pub fn evaluate(&self, projected: Utility, villain_raises: u8) -> Utility {
        let card = projected * (2. * self.probability - 1.);
        match self.tendency(villain_raises) {
            Some(w) => {
                let tendency = projected * (2. * w - 1.);
                let beta = self.settings.weight;
                (1. - beta) * card + beta * tendency
            }
            None => card,
        }
    }

    /// Learned win rate, when it is defined and trusted.
    fn tendency(&self, villain_raises: u8) -> Option<Probability> {
        match self.warm() {
            true => self
                .memory
                .win_rate(self.street, villain_raises)
                .filter(|w| (0.0..=1.0).contains(w)),
            false => None,
        }
    }

    fn warm(&self) -> bool {
        self.memory.hands() >= self.settings.warmup
    }
}
