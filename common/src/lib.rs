mod filter;
mod replay;

pub mod names;

pub use filter::*;
pub use replay::*;
