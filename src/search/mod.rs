pub mod decision;
pub use decision::*;

pub mod minimax;
pub use minimax::*;

pub mod settings;
pub use settings::*;

pub mod valuation;
pub use valuation::*;
