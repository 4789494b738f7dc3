mod catalog;
mod selection;
pub mod timestamp;

pub use catalog::*;
pub use selection::*;
