pub mod level;
pub use level::*;

pub mod memory;
pub use memory::*;

pub mod outcome;
pub use outcome::*;

pub mod tally;
pub use tally::*;
