//! Letter Slots
//!
//! A seven-letter word-finding puzzle. Each level shuffles the same tiles and
//! hides a board of target words grouped by length; the player spells words
//! from the tiles to reveal them.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_slots::catalog::LevelCatalog;
//! use letter_slots::puzzle::{PuzzleState, Verdict};
//!
//! let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 7);
//!
//! // Spell WIG from the shuffled tiles
//! for letter in "WIG".chars() {
//!     let tile = state.tiles().iter().position(|&c| c == letter).unwrap();
//!     state.press_letter(tile, letter);
//! }
//!
//! let submission = state.submit_word().unwrap();
//! assert_eq!(submission.verdict, Verdict::Correct);
//! assert!(state.buffer().is_empty());
//! ```

// Core domain types
pub mod core;

// Level data
pub mod catalog;

// Session state machine
pub mod puzzle;

// Run configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
