pub mod summary;
pub use summary::*;

pub mod table;
pub use table::*;
