//! Core domain types for the letter puzzle
//!
//! Pure value types with no knowledge of game progress: the shared alphabet,
//! levels grouped by word length, and letter multisets.

mod alphabet;
mod letters;
mod level;

pub use alphabet::{Alphabet, AlphabetError, shuffle};
pub use letters::LetterCounts;
pub use level::{BoardLayout, GroupLayout, Level, SlotRef};
