pub mod agent;
pub use agent::*;

pub mod event;
pub use event::*;

#[cfg(feature = "server")]
pub mod human;
#[cfg(feature = "server")]
pub use human::*;

pub mod mirror;
pub use mirror::*;

pub mod player;
pub use player::*;

pub mod robot;
pub use robot::*;
