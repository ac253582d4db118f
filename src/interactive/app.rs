//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::SlotRef;
use crate::puzzle::{Command, Event as PuzzleEvent, Phase, PuzzleState, Submission, Verdict};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub state: PuzzleState,
    pub config: GameConfig,
    pub messages: Vec<Message>,
    /// Slot filled by the most recent correct word
    pub last_reveal: Option<SlotRef>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl App {
    #[must_use]
    pub fn new(state: PuzzleState, config: GameConfig) -> Self {
        let mut app = Self {
            state,
            config,
            messages: Vec::new(),
            last_reveal: None,
            should_quit: false,
        };
        app.announce_level();
        app.add_message(
            "Type letters, Enter to submit, Backspace to delete.",
            MessageStyle::Info,
        );
        app
    }

    /// Translate one key press into puzzle operations
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.state.phase() {
            Phase::Playing => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => self.press_number(c),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.press_char(c),
                KeyCode::Backspace => self.delete(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            Phase::LevelComplete => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Tab) {
                    self.advance();
                }
            }
            Phase::GameComplete => match key.code {
                KeyCode::Char('r') => self.restart(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Press the first free tile showing `letter`
    pub fn press_char(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        let free = (0..self.state.tiles().len())
            .find(|&tile| self.state.tiles()[tile] == letter && !self.state.is_tile_used(tile));

        let Some(tile) = free else {
            self.add_message(&format!("No free {letter} tile"), MessageStyle::Warning);
            return;
        };
        if self.apply(Command::PressLetter { tile, letter })
            == Some(PuzzleEvent::BufferChanged { applied: false })
        {
            self.add_message("Buffer is full!", MessageStyle::Warning);
        }
    }

    /// Press a tile by its 1-based number
    fn press_number(&mut self, digit: char) {
        let Some(tile) = digit.to_digit(10).filter(|&n| n > 0).map(|n| n as usize - 1) else {
            return;
        };
        if let Some(&letter) = self.state.tiles().get(tile) {
            self.apply(Command::PressLetter { tile, letter });
        }
    }

    pub fn delete(&mut self) {
        self.apply(Command::DeleteLetter);
    }

    pub fn submit(&mut self) {
        if let Some(PuzzleEvent::Submitted(submission)) = self.apply(Command::SubmitWord) {
            self.report(&submission);
        }
    }

    /// Send one command to the puzzle, reporting navigation errors
    fn apply(&mut self, command: Command) -> Option<PuzzleEvent> {
        match self.state.dispatch(command) {
            Ok(event) => Some(event),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                None
            }
        }
    }

    fn report(&mut self, submission: &Submission) {
        let style = match submission.verdict {
            Verdict::Correct => MessageStyle::Success,
            Verdict::WrongWord => MessageStyle::Error,
            Verdict::AlreadyFound | Verdict::AlreadyFoundPastLevel { .. } => MessageStyle::Warning,
        };
        let text = if submission.is_correct() {
            format!("{} {}", submission.word, submission.verdict)
        } else {
            submission.verdict.to_string()
        };
        self.add_message(&text, style);

        if let Some(reveal) = &submission.reveal {
            self.last_reveal = Some(reveal.slot);
        }

        match submission.completion {
            Some(done) if done.is_final_level => {
                self.add_message("🎉 ALL LEVELS CLEARED! 🎉", MessageStyle::Success);
                self.add_message("Press 'r' to play again or 'q' to quit.", MessageStyle::Info);
            }
            Some(done) => {
                self.add_message(
                    &format!("🎉 LEVEL {} COMPLETE! Press Enter for the next level.", done.level + 1),
                    MessageStyle::Success,
                );
            }
            None => {}
        }
    }

    pub fn advance(&mut self) {
        if let Some(PuzzleEvent::LevelStarted(_)) = self.apply(Command::AdvanceLevel) {
            self.last_reveal = None;
            self.announce_level();
        }
    }

    /// Throw the session away and start over
    pub fn restart(&mut self) {
        match self.config.session_for(self.state.catalog().clone()) {
            Ok(state) => {
                self.state = state;
                self.last_reveal = None;
                self.messages.clear();
                self.announce_level();
            }
            Err(err) => self.add_message(&format!("{err:#}"), MessageStyle::Error),
        }
    }

    fn announce_level(&mut self) {
        let text = format!("LEVEL {}", self.state.level_index() + 1);
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Words found so far and the level total
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let total = self.state.level().word_count();
        (total - self.state.remaining(), total)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
