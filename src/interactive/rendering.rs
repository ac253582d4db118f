//! TUI rendering with ratatui
//!
//! Board, tile row and typed-letter strip for the puzzle.

use super::app::{App, MessageStyle};
use crate::core::SlotRef;
use crate::output::formatters::{format_buffer, group_label};
use crate::puzzle::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Tiles
            Constraint::Length(3), // Typed letters
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Board
            Constraint::Percentage(35), // Progress and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_tiles(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔤 LETTER SLOTS - Level {} of {}",
        app.state.level_index() + 1,
        app.state.catalog().level_count()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.state.board();
    let mut lines = Vec::new();

    for group in &board.groups {
        lines.push(Line::from(Span::styled(
            group_label(group.length),
            Style::default().fg(Color::DarkGray),
        )));

        let mut spans = vec![Span::raw(" ")];
        for (slot, word) in group.slots.iter().enumerate() {
            let just_found = app.last_reveal
                == Some(SlotRef {
                    length: group.length,
                    slot,
                });
            let style = match (word, just_found) {
                (Some(_), true) => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                (Some(_), false) => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                (None, _) => Style::default().fg(Color::DarkGray),
            };

            let cells: String = match word {
                Some(word) => word.chars().map(|c| format!("[{c}]")).collect(),
                None => "[ ]".repeat(group.length),
            };
            spans.push(Span::styled(cells, style));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (found, total) = app.progress();
    let percent = if total == 0 {
        100
    } else {
        (found * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Found ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{found}/{total}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::Blue),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_tiles(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, &letter) in app.state.tiles().iter().enumerate() {
        let style = if app.state.is_tile_used(i) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::styled(
            format!("{} ", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let tiles = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Tiles ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(tiles, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.state.phase() {
        Phase::Playing => (
            " Typed | Enter: submit  Backspace: delete ",
            format_buffer(&app.state.buffer().word(), app.state.buffer().capacity()),
            Color::Yellow,
        ),
        Phase::LevelComplete => (
            " 🎉 LEVEL COMPLETE! 🎉 | Enter for the next level ",
            String::new(),
            Color::Green,
        ),
        Phase::GameComplete => (
            " 🎉 ALL LEVELS CLEARED! 🎉 | 'r' to play again, 'q' to quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.state.phase() {
        Phase::Playing => "letters/1-7: type | Enter: submit | Backspace: delete | Esc: quit",
        Phase::LevelComplete => "Enter/Tab: next level | Esc: quit",
        Phase::GameComplete => "r: play again | q/Esc: quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
