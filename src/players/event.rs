use crate::Chips;
use crate::betting::Action;
use crate::betting::Turn;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;

/// Table notifications, relative to the player receiving them.
///
/// [`Turn::Hero`] is always the recipient. Stacks are listed hero first.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A match begins with equal stacks.
    Start { stack: Chips },
    /// A hand is dealt. Stacks are counted before the blinds go in.
    Round {
        hole: Hole,
        stacks: (Chips, Chips),
        big_blind: Turn,
        small_blind: Chips,
    },
    /// A street begins with the board as shown.
    Street { street: Street, board: Hand },
    /// Someone acted. `bet` is that side's total stake in the hand afterwards.
    Act { actor: Turn, action: Action, bet: Chips },
    /// The hand is over. No winner means the pot was split.
    Result {
        winner: Option<Turn>,
        stacks: (Chips, Chips),
    },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Start { stack } => write!(f, "start {}", stack),
            Event::Round { hole, stacks, big_blind, .. } => {
                write!(f, "deal  {} stacks {}/{} bb {}", hole, stacks.0, stacks.1, big_blind)
            }
            Event::Street { street, board } => write!(f, "{:<5} {}", street, board),
            Event::Act { actor, action, bet } => write!(f, "{:<7} {} -> {}", actor, action, bet),
            Event::Result { winner: Some(w), stacks } => {
                write!(f, "won by {} stacks {}/{}", w, stacks.0, stacks.1)
            }
            Event::Result { winner: None, stacks } => {
                write!(f, "split stacks {}/{}", stacks.0, stacks.1)
            }
        }
    }
}
