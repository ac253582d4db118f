//! Display functions for puzzle snapshots and outcomes

use super::formatters::{create_progress_bar, format_slot, format_tiles, group_label};
use crate::catalog::LevelCatalog;
use crate::puzzle::{Board, PuzzleState, Submission, Verdict};
use colored::Colorize;
use std::io::{self, Write};

/// Print the "LEVEL n" banner
///
/// # Errors
/// Returns any error from the writer.
pub fn write_level_banner<W: Write>(out: &mut W, level: usize, count: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).cyan())?;
    writeln!(
        out,
        " {}",
        format!("LEVEL {} of {count}", level + 1).bright_blue().bold()
    )?;
    writeln!(out, "{}", "═".repeat(50).cyan())
}

/// Print the board, one line per word-length group
///
/// # Errors
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for group in &board.groups {
        writeln!(out, "\n{}", group_label(group.length).bright_black())?;
        let slots: Vec<String> = group
            .slots
            .iter()
            .map(|slot| match slot {
                Some(word) => format_slot(group.length, Some(word.as_str())).green().bold().to_string(),
                None => format_slot(group.length, None),
            })
            .collect();
        writeln!(out, "  {}", slots.join("   "))?;
    }

    let total: usize = board.groups.iter().map(|g| g.slots.len()).sum();
    let found = board.revealed();
    writeln!(
        out,
        "\nFound {found}/{total} {}",
        create_progress_bar(found, total, 18).green()
    )
}

/// Print the tile row and the typed letters
///
/// # Errors
/// Returns any error from the writer.
pub fn write_tiles<W: Write>(out: &mut W, state: &PuzzleState) -> io::Result<()> {
    let tiles = format_tiles(state.tiles(), |i| state.is_tile_used(i));
    writeln!(out, "\n{}", format!("Tiles: {tiles}").bright_yellow())?;
    if !state.buffer().is_empty() {
        writeln!(out, "{}", format!("Typed: {}", state.buffer().word()).bold())?;
    }
    Ok(())
}

/// Print the outcome of a submission
///
/// # Errors
/// Returns any error from the writer.
pub fn write_submission<W: Write>(out: &mut W, submission: &Submission) -> io::Result<()> {
    let message = submission.verdict.to_string();
    let line = match submission.verdict {
        Verdict::Correct => format!("✅ {} {message}", submission.word).green().bold(),
        Verdict::WrongWord => format!("❌ {message}").red(),
        Verdict::AlreadyFound | Verdict::AlreadyFoundPastLevel { .. } => {
            format!("🔁 {message}").yellow()
        }
    };
    writeln!(out, "{line}")?;

    if let Some(done) = submission.completion {
        if done.is_final_level {
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "   🎉 ✨  A L L   L E V E L S   C L E A R E D !  ✨ 🎉"
                    .bright_green()
                    .bold()
            )?;
            writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
        } else {
            writeln!(
                out,
                "{}",
                format!("🎉 LEVEL {} COMPLETE! Type 'next' to continue.", done.level + 1)
                    .bright_green()
                    .bold()
            )?;
        }
    }
    Ok(())
}

/// Print every level of a catalog
///
/// # Errors
/// Returns any error from the writer.
pub fn write_catalog<W: Write>(out: &mut W, catalog: &LevelCatalog) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).cyan())?;
    writeln!(out, " {}", "LEVEL CATALOG".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(50).cyan())?;
    writeln!(
        out,
        "\nLetters: {}",
        catalog.alphabet().to_string().bright_yellow()
    )?;

    for (index, level) in catalog.levels().enumerate() {
        writeln!(
            out,
            "\n{} ({} words, {} cells)",
            format!("Level {}", index + 1).bold(),
            level.word_count(),
            level.layout().total_cells()
        )?;
        for length in level.lengths() {
            writeln!(
                out,
                "  {:<16} {}",
                group_label(length),
                level.words_of_length(length).join(", ")
            )?;
        }
    }

    writeln!(
        out,
        "\n{}",
        format!(
            "✅ {} levels valid: every word can be spelled from the tiles",
            catalog.level_count()
        )
        .green()
    )
}
