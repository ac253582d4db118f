//! Level catalog
//!
//! Read-only, validated sequence of levels sharing one alphabet.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_LETTERS, DEFAULT_LEVELS};

use crate::core::{Alphabet, AlphabetError, LetterCounts, Level};
use rustc_hash::FxHashSet;
use std::io;
use thiserror::Error;

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
    #[error("catalog has no levels")]
    NoLevels,
    #[error("level {level} has no words")]
    EmptyLevel { level: usize },
    #[error("level {level}: {word:?} is not a word of ASCII letters")]
    InvalidWord { level: usize, word: String },
    #[error("level {level}: {word:?} appears more than once")]
    DuplicateWord { level: usize, word: String },
    #[error("level {level}: {word:?} needs more {letter:?} tiles than the alphabet has")]
    UnspellableWord {
        level: usize,
        word: String,
        letter: char,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),
}

/// Ordered, immutable sequence of levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    alphabet: Alphabet,
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Build a catalog, validating every level against the alphabet
    ///
    /// Level numbers in errors are 1-based.
    ///
    /// # Errors
    /// Returns `CatalogError` if there are no levels, a level is empty, a word
    /// is malformed or repeated within its level, or a word cannot be spelled
    /// from the alphabet's tiles.
    pub fn new(alphabet: Alphabet, levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::NoLevels);
        }

        let pool = alphabet.counts();
        for (index, level) in levels.iter().enumerate() {
            validate_level(index + 1, level, &pool)?;
        }

        Ok(Self { alphabet, levels })
    }

    /// The built-in two-level catalog
    ///
    /// # Panics
    /// Will not panic - the embedded data is covered by tests.
    #[must_use]
    pub fn embedded() -> Self {
        let alphabet =
            Alphabet::new(DEFAULT_LETTERS.iter().copied()).expect("embedded alphabet is valid");
        let levels = DEFAULT_LEVELS
            .iter()
            .map(|words| Level::new(words.iter()))
            .collect();
        Self::new(alphabet, levels).expect("embedded catalog is valid")
    }

    #[inline]
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Level at a 0-based index
    #[inline]
    #[must_use]
    pub fn level_at(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Level 0; a validated catalog always has one
    #[inline]
    #[must_use]
    pub fn first_level(&self) -> &Level {
        &self.levels[0]
    }

    pub fn levels(&self) -> impl Iterator<Item = &Level> + '_ {
        self.levels.iter()
    }

    /// Whether `index` is the last level
    #[inline]
    #[must_use]
    pub fn is_final(&self, index: usize) -> bool {
        index + 1 == self.levels.len()
    }
}

fn validate_level(level_no: usize, level: &Level, pool: &LetterCounts) -> Result<(), CatalogError> {
    if level.word_count() == 0 {
        return Err(CatalogError::EmptyLevel { level: level_no });
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for word in level.all_words() {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CatalogError::InvalidWord {
                level: level_no,
                word: word.to_string(),
            });
        }
        if !seen.insert(word) {
            return Err(CatalogError::DuplicateWord {
                level: level_no,
                word: word.to_string(),
            });
        }
        if let Some(letter) = LetterCounts::of_word(word).first_excess(pool) {
            return Err(CatalogError::UnspellableWord {
                level: level_no,
                word: word.to_string(),
                letter,
            });
        }
    }

    Ok(())
}
