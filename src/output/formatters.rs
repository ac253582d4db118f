//! Formatting utilities for terminal output

/// Label above a group of slots
#[must_use]
pub fn group_label(length: usize) -> String {
    format!("{length} LETTER WORDS")
}

/// One board slot: letters when revealed, underscores when blank
#[must_use]
pub fn format_slot(length: usize, word: Option<&str>) -> String {
    match word {
        Some(word) => spaced(word.chars()),
        None => spaced(std::iter::repeat_n('_', length)),
    }
}

/// Typed letters padded with blanks up to the buffer capacity
#[must_use]
pub fn format_buffer(letters: &str, capacity: usize) -> String {
    let blanks = capacity.saturating_sub(letters.chars().count());
    spaced(letters.chars().chain(std::iter::repeat_n('_', blanks)))
}

/// Tile row with 1-based numbers; used tiles show as `·`
#[must_use]
pub fn format_tiles<F: Fn(usize) -> bool>(tiles: &[char], is_used: F) -> String {
    tiles
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            let shown = if is_used(i) { '·' } else { letter };
            format!("{}:{shown}", i + 1)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { width } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn spaced<I: Iterator<Item = char>>(letters: I) -> String {
    letters.map(String::from).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_blank_and_revealed() {
        assert_eq!(format_slot(3, None), "_ _ _");
        assert_eq!(format_slot(3, Some("WIG")), "W I G");
    }

    #[test]
    fn buffer_pads_to_capacity() {
        assert_eq!(format_buffer("", 3), "_ _ _");
        assert_eq!(format_buffer("TW", 4), "T W _ _");
        assert_eq!(format_buffer("ABC", 2), "A B C");
    }

    #[test]
    fn tiles_mark_used() {
        let tiles = ['W', 'I', 'G'];
        assert_eq!(format_tiles(&tiles, |_| false), "1:W  2:I  3:G");
        assert_eq!(format_tiles(&tiles, |i| i == 1), "1:W  2:·  3:G");
    }

    #[test]
    fn group_labels() {
        assert_eq!(group_label(4), "4 LETTER WORDS");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 9, 9), "░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(9, 9, 9), "█████████");
    }

    #[test]
    fn progress_bar_partial() {
        assert_eq!(create_progress_bar(3, 9, 9), "███░░░░░░");
    }
}
