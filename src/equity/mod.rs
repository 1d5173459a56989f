pub mod estimator;
pub use estimator::*;

pub mod montecarlo;
pub use montecarlo::*;

pub mod oracle;
pub use oracle::*;

pub mod preflop;
pub use preflop::*;
