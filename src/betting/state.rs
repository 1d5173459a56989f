use super::schedule::Schedule;
use super::turn::Turn;
use crate::Chips;
use crate::RAISES_PER_ROUND;
use crate::RAISES_PER_STREET;
use crate::Utility;
use crate::cards::Street;

/// The betting sub-game that remains on the current street.
///
/// A snapshot is built fresh for every decision and then only ever copied:
/// each search edge returns a modified value, so no two nodes alias.
/// Bets are total chips committed this hand; stacks are what is left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RaiseCapState {
    pub street: Street,
    pub street_raises: u8,
    pub hero_raises: u8,
    pub villain_raises: u8,
    pub hero_bet: Chips,
    pub villain_bet: Chips,
    pub hero_stack: Chips,
    pub villain_stack: Chips,
}

impl RaiseCapState {
    /// Panics if any budget left its range or a stack went negative.
    pub fn check(&self) {
        assert!(self.street_raises <= RAISES_PER_STREET, "street budget {}", self.street_raises);
        assert!(self.hero_raises <= RAISES_PER_ROUND, "hero budget {}", self.hero_raises);
        assert!(self.villain_raises <= RAISES_PER_ROUND, "villain budget {}", self.villain_raises);
        assert!(self.hero_stack >= 0 && self.villain_stack >= 0, "negative stack {:?}", self);
        assert!(self.hero_bet >= 0 && self.villain_bet >= 0, "negative bet {:?}", self);
    }

    pub fn bet(&self, turn: Turn) -> Chips {
        match turn {
            Turn::Hero => self.hero_bet,
            Turn::Villain => self.villain_bet,
        }
    }
    pub fn stack(&self, turn: Turn) -> Chips {
        match turn {
            Turn::Hero => self.hero_stack,
            Turn::Villain => self.villain_stack,
        }
    }
    /// Raises the side may still make this hand.
    pub fn budget(&self, turn: Turn) -> u8 {
        match turn {
            Turn::Hero => self.hero_raises,
            Turn::Villain => self.villain_raises,
        }
    }
    /// Raises the side has already made this hand.
    pub fn raised(&self, turn: Turn) -> u8 {
        RAISES_PER_ROUND - self.budget(turn)
    }
    /// Chips the side must add to match the other bet.
    pub fn to_call(&self, turn: Turn) -> Chips {
        (self.bet(turn.other()) - self.bet(turn)).max(0)
    }
    /// Hero-relative result if this side folds now.
    pub fn folding(&self, turn: Turn) -> Utility {
        match turn {
            Turn::Hero => -self.hero_bet as Utility,
            Turn::Villain => self.villain_bet as Utility,
        }
    }

    /// Raise cap not reached, own budget left, and both stacks can still move chips.
    pub fn can_raise(&self, turn: Turn) -> bool {
        self.street_raises > 0
            && self.budget(turn) > 0
            && self.stack(turn) > self.to_call(turn)
            && self.stack(turn.other()) > 0
    }
    /// The schedule's increment when both stacks cover it, otherwise the
    /// largest amount either side can still put in.
    pub fn raise_size(&self, turn: Turn, schedule: &Schedule) -> Chips {
        let increment = schedule.increment(self.street);
        let owed = self.to_call(turn);
        let mine = self.stack(turn);
        let theirs = self.stack(turn.other());
        if mine >= owed + increment && theirs >= increment {
            increment
        } else {
            (mine - owed).min(theirs)
        }
    }

    /// Side matches the outstanding bet.
    pub fn call(&self, turn: Turn) -> Self {
        let owed = self.to_call(turn);
        let mut next = *self;
        match turn {
            Turn::Hero => {
                next.hero_bet += owed;
                next.hero_stack -= owed;
            }
            Turn::Villain => {
                next.villain_bet += owed;
                next.villain_stack -= owed;
            }
        }
        next.check();
        next
    }
    /// Side matches the outstanding bet and adds `amount` on top.
    pub fn raise(&self, turn: Turn, amount: Chips) -> Self {
        assert!(self.street_raises > 0, "no raises left this street");
        assert!(self.budget(turn) > 0, "{} has no raises left this hand", turn);
        let mut next = self.call(turn);
        next.street_raises -= 1;
        match turn {
            Turn::Hero => {
                next.hero_bet += amount;
                next.hero_stack -= amount;
                next.hero_raises -= 1;
            }
            Turn::Villain => {
                next.villain_bet += amount;
                next.villain_stack -= amount;
                next.villain_raises -= 1;
            }
        }
        next.check();
        next
    }
}

impl std::fmt::Display for RaiseCapState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8} bets {}/{} stacks {}/{} raises street {} hero {} villain {}",
            self.street,
            self.hero_bet,
            self.villain_bet,
            self.hero_stack,
            self.villain_stack,
            self.street_raises,
            self.hero_raises,
            self.villain_raises,
        )
    }
}
