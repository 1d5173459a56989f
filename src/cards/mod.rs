pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod observation;
pub use observation::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
