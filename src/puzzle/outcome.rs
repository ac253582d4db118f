//! Results the puzzle hands back to a presentation adapter

use crate::core::{BoardLayout, SlotRef};
use std::fmt;
use thiserror::Error;

/// Navigation errors
///
/// Normal play never reaches these; they guard against adapters asking for a
/// level that does not exist or re-entering a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("level index {index} is out of range (catalog has {count} levels)")]
    InvalidLevel { index: usize, count: usize },
    #[error("level {} is the last level", .current + 1)]
    NoNextLevel { current: usize },
    #[error("the game is over, start a new session to play again")]
    GameOver,
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    LevelComplete,
    GameComplete,
}

/// Everything an adapter needs to draw a fresh level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStart {
    /// 0-based level index
    pub level: usize,
    /// Shuffled alphabet, one entry per tile
    pub tiles: Vec<char>,
    pub layout: BoardLayout,
}

/// Judgement on a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    WrongWord,
    AlreadyFound,
    /// Claimed in an earlier level (0-based index of that level)
    AlreadyFoundPastLevel { level: usize },
}

/// Cells to fill after a correct word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub slot: SlotRef,
    pub cells: Vec<char>,
}

/// Signal raised when the last target word of a level is found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelComplete {
    pub level: usize,
    pub is_final_level: bool,
}

/// Full result of `submit_word`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub word: String,
    pub verdict: Verdict,
    pub reveal: Option<Reveal>,
    pub completion: Option<LevelComplete>,
}

impl Submission {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self.verdict, Verdict::Correct)
    }

    /// Whether this submission finished the whole game
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.completion.is_some_and(|c| c.is_final_level)
    }
}

/// Board snapshot: every slot, revealed or blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub groups: Vec<BoardGroup>,
}

/// Slots of one word length; `None` is a blank slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGroup {
    pub length: usize,
    pub slots: Vec<Option<String>>,
}

impl Board {
    /// Number of revealed slots
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.slots.iter())
            .filter(|slot| slot.is_some())
            .count()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "Correct!"),
            Self::WrongWord => write!(f, "Wrong word!"),
            Self::AlreadyFound => write!(f, "Already found!"),
            Self::AlreadyFoundPastLevel { level } => {
                write!(f, "Already found in level {}!", level + 1)
            }
        }
    }
}
