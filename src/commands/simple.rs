//! Simple interactive text mode
//!
//! Line-based front end without the TUI. Each input line becomes one or more
//! puzzle operations; output is written after every change.

use crate::output::{write_board, write_level_banner, write_submission, write_tiles};
use crate::puzzle::{Phase, PuzzleState};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// One parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleInput {
    /// Type these letters and submit them as a word
    Word(String),
    /// Type letters without submitting
    Type(String),
    Delete,
    Enter,
    Next,
    Board,
    Help,
    Quit,
    Invalid(String),
}

/// Parse a line of input
#[must_use]
pub fn parse_input(line: &str) -> SimpleInput {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(h, r)| (h, r.trim()));

    match head.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => SimpleInput::Quit,
        "del" | "delete" | "-" => SimpleInput::Delete,
        "enter" | "" => SimpleInput::Enter,
        "next" | "n" => SimpleInput::Next,
        "board" | "b" => SimpleInput::Board,
        "help" | "?" => SimpleInput::Help,
        "type" | "t" if is_letters(rest) => SimpleInput::Type(rest.to_ascii_uppercase()),
        _ if rest.is_empty() && is_letters(head) => SimpleInput::Word(head.to_ascii_uppercase()),
        _ => SimpleInput::Invalid(line.to_string()),
    }
}

fn is_letters(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

/// Run the text mode until the game ends, the player quits, or input runs out
///
/// Returns the phase the session ended in.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    state: &mut PuzzleState,
    reader: R,
    out: &mut W,
) -> Result<Phase> {
    writeln!(out, "\n╔════════════════════════════════════════════════╗")?;
    writeln!(out, "║           Letter Slots - Text Mode             ║")?;
    writeln!(out, "╚════════════════════════════════════════════════╝")?;
    write_help(out)?;
    write_level(out, state)?;

    for line in reader.lines() {
        let line = line?;

        match parse_input(&line) {
            SimpleInput::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(state.phase());
            }
            SimpleInput::Word(letters) => {
                type_letters(state, &letters, out)?;
                if submit(state, out)? {
                    return Ok(state.phase());
                }
            }
            SimpleInput::Type(letters) => {
                type_letters(state, &letters, out)?;
                write_tiles(out, state)?;
            }
            SimpleInput::Delete => {
                if state.delete_letter().is_none() {
                    writeln!(out, "Nothing to delete.")?;
                }
                write_tiles(out, state)?;
            }
            SimpleInput::Enter => {
                if submit(state, out)? {
                    return Ok(state.phase());
                }
            }
            SimpleInput::Next => {
                if state.phase() == Phase::LevelComplete {
                    state.advance_level()?;
                    write_level(out, state)?;
                } else {
                    writeln!(out, "{}", "Find every word before moving on.".yellow())?;
                }
            }
            SimpleInput::Board => {
                write_board(out, &state.board())?;
                write_tiles(out, state)?;
            }
            SimpleInput::Help => write_help(out)?,
            SimpleInput::Invalid(text) => {
                writeln!(out, "{}", format!("❌ Unrecognised input: {text}").red())?;
            }
        }
    }

    Ok(state.phase())
}

/// Press a free tile for each letter, reporting letters with no tile left
fn type_letters<W: Write>(state: &mut PuzzleState, letters: &str, out: &mut W) -> Result<()> {
    if state.phase() != Phase::Playing {
        return Ok(());
    }

    for letter in letters.chars() {
        let free = (0..state.tiles().len())
            .find(|&tile| state.tiles()[tile] == letter && !state.is_tile_used(tile));

        let Some(tile) = free else {
            writeln!(out, "No free {letter} tile, letter ignored.")?;
            continue;
        };
        if !state.press_letter(tile, letter) {
            writeln!(out, "Buffer is full, {letter} ignored.")?;
        }
    }
    Ok(())
}

/// Submit the buffer; returns true once the whole game is complete
fn submit<W: Write>(state: &mut PuzzleState, out: &mut W) -> Result<bool> {
    let Some(submission) = state.submit_word() else {
        writeln!(out, "{}", "Level complete. Type 'next' to continue.".yellow())?;
        return Ok(false);
    };

    write_submission(out, &submission)?;
    if submission.is_correct() && !submission.is_game_complete() {
        write_board(out, &state.board())?;
        if state.phase() == Phase::Playing {
            write_tiles(out, state)?;
        }
    }
    Ok(submission.is_game_complete())
}

fn write_level<W: Write>(out: &mut W, state: &PuzzleState) -> Result<()> {
    write_level_banner(out, state.level_index(), state.catalog().level_count())?;
    write_board(out, &state.board())?;
    write_tiles(out, state)?;
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nSpell words from the tiles to fill every slot.")?;
    writeln!(out, "  <word>        type and submit a word")?;
    writeln!(out, "  type <abc>    type letters without submitting")?;
    writeln!(out, "  del           delete the last letter")?;
    writeln!(out, "  enter         submit typed letters")?;
    writeln!(out, "  next          go to the next level once complete")?;
    writeln!(out, "  board         show the board again")?;
    writeln!(out, "  help / quit")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LevelCatalog;
    use crate::catalog::loader::parse_catalog;
    use std::io::Cursor;

    fn play(state: &mut PuzzleState, script: &str) -> (Phase, String) {
        let mut out = Vec::new();
        let phase = run_simple(state, Cursor::new(script.to_string()), &mut out).unwrap();
        (phase, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_words_and_commands() {
        assert_eq!(parse_input("wig"), SimpleInput::Word("WIG".to_string()));
        assert_eq!(parse_input("  Night  "), SimpleInput::Word("NIGHT".to_string()));
        assert_eq!(parse_input("type th"), SimpleInput::Type("TH".to_string()));
        assert_eq!(parse_input("del"), SimpleInput::Delete);
        assert_eq!(parse_input(""), SimpleInput::Enter);
        assert_eq!(parse_input("NEXT"), SimpleInput::Next);
        assert_eq!(parse_input("q"), SimpleInput::Quit);
        assert_eq!(parse_input("b"), SimpleInput::Board);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_input("w1g"), SimpleInput::Invalid(_)));
        assert!(matches!(parse_input("two words"), SimpleInput::Invalid(_)));
        assert!(matches!(parse_input("type 42"), SimpleInput::Invalid(_)));
    }

    #[test]
    fn example_words_then_quit() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 4);
        let (phase, text) = play(&mut state, "wig\nwig\nzzz\nquit\n");

        assert_eq!(phase, Phase::Playing);
        assert!(text.contains("WIG Correct!"));
        assert!(text.contains("Already found!"));
        assert!(text.contains("No free Z tile"));
        assert!(text.contains("Wrong word!"));
        assert!(text.contains("Thanks for playing"));
        assert_eq!(state.found_words().collect::<Vec<_>>(), vec!["WIG"]);
    }

    #[test]
    fn type_delete_enter() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 4);
        let (_, text) = play(&mut state, "type hits\ndel\nenter\n");

        assert!(text.contains("Typed: HITS"));
        assert!(text.contains("Typed: HIT"));
        assert!(text.contains("HIT Correct!"));
        assert!(state.buffer().is_empty());
    }

    #[test]
    fn delete_on_empty_buffer() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 4);
        let (_, text) = play(&mut state, "del\n");
        assert!(text.contains("Nothing to delete."));
    }

    #[test]
    fn next_requires_complete_level() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 4);
        let (_, text) = play(&mut state, "next\n");
        assert!(text.contains("Find every word before moving on."));
        assert_eq!(state.level_index(), 0);
    }

    #[test]
    fn full_game_to_completion() {
        let catalog =
            parse_catalog("letters = IGHNSTW\nlevel = WIG SIGN\nlevel = HINT TWIG").unwrap();
        let mut state = PuzzleState::with_seed(catalog, 8);
        let (phase, text) = play(&mut state, "wig\nsign\nnext\nsign\nhint\ntwig\nquit\n");

        assert_eq!(phase, Phase::GameComplete);
        assert!(text.contains("LEVEL 1 COMPLETE!"));
        assert!(text.contains("LEVEL 2 of 2"));
        assert!(text.contains("Already found in level 1!"));
        assert!(text.contains("A L L   L E V E L S"));
        // The session stops at game completion, before reading "quit"
        assert!(!text.contains("Thanks for playing"));
    }

    #[test]
    fn input_exhaustion_ends_session() {
        let mut state = PuzzleState::with_seed(LevelCatalog::embedded(), 4);
        let (phase, _) = play(&mut state, "wig\n");
        assert_eq!(phase, Phase::Playing);
    }
}
