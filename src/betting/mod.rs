pub mod action;
pub use action::*;

pub mod schedule;
pub use schedule::*;

pub mod state;
pub use state::*;

pub mod turn;
pub use turn::*;
