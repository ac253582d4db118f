//! Terminal output formatting
//!
//! Plain-text rendering of boards, tiles and outcomes for the text mode and
//! the `levels` command.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_catalog, write_level_banner, write_submission, write_tiles};
