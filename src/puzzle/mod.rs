//! Puzzle session logic
//!
//! `PuzzleState` is the only mutable piece of the game. Adapters either call
//! its operations directly or send it `Command`s through `dispatch`.

mod buffer;
mod command;
mod outcome;
mod state;

pub use buffer::{TileId, TypedBuffer};
pub use command::{Command, Event};
pub use outcome::{
    Board, BoardGroup, LevelComplete, LevelStart, Phase, PuzzleError, Reveal, Submission, Verdict,
};
pub use state::PuzzleState;
