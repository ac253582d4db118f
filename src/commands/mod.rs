//! Command implementations

pub mod levels;
pub mod simple;

pub use levels::run_levels;
pub use simple::{SimpleInput, parse_input, run_simple};
