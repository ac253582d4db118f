//! Explicit command dispatch
//!
//! Adapters translate UI events into `Command`s; each maps to exactly one
//! puzzle operation and yields one `Event` to re-render from.

use super::buffer::TileId;
use super::outcome::{LevelStart, PuzzleError, Submission};
use super::state::PuzzleState;

/// Inbound operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartLevel(usize),
    PressLetter { tile: TileId, letter: char },
    DeleteLetter,
    SubmitWord,
    AdvanceLevel,
}

/// What changed after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LevelStarted(LevelStart),
    /// The buffer may have changed; `applied` is false for ignored input
    BufferChanged { applied: bool },
    Submitted(Submission),
    /// The command does nothing in the current phase
    Ignored,
}

impl PuzzleState {
    /// Apply one command
    ///
    /// # Errors
    ///
    /// Returns the navigation errors of [`PuzzleState::start_level`] and
    /// [`PuzzleState::advance_level`]. Gameplay rejections are never errors.
    pub fn dispatch(&mut self, command: Command) -> Result<Event, PuzzleError> {
        log::trace!("dispatch {command:?}");

        let event = match command {
            Command::StartLevel(index) => Event::LevelStarted(self.start_level(index)?),
            Command::PressLetter { tile, letter } => Event::BufferChanged {
                applied: self.press_letter(tile, letter),
            },
            Command::DeleteLetter => Event::BufferChanged {
                applied: self.delete_letter().is_some(),
            },
            Command::SubmitWord => self
                .submit_word()
                .map_or(Event::Ignored, Event::Submitted),
            Command::AdvanceLevel => Event::LevelStarted(self.advance_level()?),
        };

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LevelCatalog;
    use crate::puzzle::{Phase, Verdict};

    fn press_word(state: &mut PuzzleState, word: &str) {
        for letter in word.chars() {
            let tile = state
                .tiles()
                .iter()
                .enumerate()
                .position(|(t, &c)| c == letter && !state.is_tile_used(t))
                .unwrap();
            let event = state
                .dispatch(Command::PressLetter { tile, letter })
                .unwrap();
            assert_eq!(event, Event::BufferChanged { applied: true });
        }
    }

    #[test]
    fn example_session_through_dispatch() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 1);

        press_word(&mut state, "WIG");
        let Event::Submitted(first) = state.dispatch(Command::SubmitWord).unwrap() else {
            panic!("expected a submission");
        };
        assert_eq!(first.verdict, Verdict::Correct);
        assert_eq!(first.reveal.unwrap().slot.length, 3);

        press_word(&mut state, "WIG");
        let Event::Submitted(second) = state.dispatch(Command::SubmitWord).unwrap() else {
            panic!("expected a submission");
        };
        assert_eq!(second.verdict, Verdict::AlreadyFound);
    }

    #[test]
    fn delete_reports_whether_anything_changed() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 1);
        assert_eq!(
            state.dispatch(Command::DeleteLetter).unwrap(),
            Event::BufferChanged { applied: false }
        );

        press_word(&mut state, "H");
        assert_eq!(
            state.dispatch(Command::DeleteLetter).unwrap(),
            Event::BufferChanged { applied: true }
        );
    }

    #[test]
    fn navigation_errors_surface() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 1);
        assert_eq!(
            state.dispatch(Command::StartLevel(9)),
            Err(PuzzleError::InvalidLevel { index: 9, count: 2 })
        );

        let Event::LevelStarted(start) = state.dispatch(Command::AdvanceLevel).unwrap() else {
            panic!("expected level start");
        };
        assert_eq!(start.level, 1);
        assert_eq!(
            state.dispatch(Command::AdvanceLevel),
            Err(PuzzleError::NoNextLevel { current: 1 })
        );
    }

    #[test]
    fn submit_after_completion_is_ignored() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 1);
        let words: Vec<String> = state.level().all_words().map(str::to_string).collect();
        for word in &words {
            press_word(&mut state, word);
            state.dispatch(Command::SubmitWord).unwrap();
        }
        assert_eq!(state.phase(), Phase::LevelComplete);
        assert_eq!(state.dispatch(Command::SubmitWord).unwrap(), Event::Ignored);
    }
}
