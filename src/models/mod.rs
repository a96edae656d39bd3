pub mod column;
pub mod table;
pub mod candidate;

pub use column::*;
pub use table::*;
pub use candidate::*;
