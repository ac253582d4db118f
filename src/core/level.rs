//! A puzzle level: target words grouped by length

use std::collections::BTreeMap;

/// One level of the puzzle
///
/// Maps word length to the target words of that length. Lengths iterate in
/// ascending order, words keep their catalog order so each has a stable slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    groups: BTreeMap<usize, Vec<String>>,
}

/// Position of a word on the board: its length group and slot within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub length: usize,
    pub slot: usize,
}

/// Blank board for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub groups: Vec<GroupLayout>,
}

/// One row of equally long slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLayout {
    /// Letters per slot
    pub length: usize,
    /// Number of slots in the group
    pub slots: usize,
}

impl GroupLayout {
    /// Blank cells in this group
    #[inline]
    #[must_use]
    pub const fn blank_cells(&self) -> usize {
        self.length * self.slots
    }
}

impl BoardLayout {
    #[must_use]
    pub fn total_slots(&self) -> usize {
        self.groups.iter().map(|g| g.slots).sum()
    }

    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.groups.iter().map(GroupLayout::blank_cells).sum()
    }
}

impl Level {
    /// Build a level from a flat word list, grouping by length
    ///
    /// Words are uppercased. Validation against the alphabet happens when the
    /// level is added to a catalog.
    ///
    /// # Examples
    /// ```
    /// use letter_slots::core::Level;
    ///
    /// let level = Level::new(["wig", "twig", "hit"]);
    /// assert_eq!(level.lengths().collect::<Vec<_>>(), vec![3, 4]);
    /// assert_eq!(level.words_of_length(3), &["WIG".to_string(), "HIT".to_string()]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in words {
            let word = word.as_ref().trim().to_ascii_uppercase();
            groups.entry(word.chars().count()).or_default().push(word);
        }
        Self { groups }
    }

    /// Word lengths present, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    /// Target words of a given length, empty if none
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.groups.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Every target word, shortest group first
    pub fn all_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.values().flatten().map(String::as_str)
    }

    /// Total number of target words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether `word` (uppercase) is a target of this level
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.slot_of(word).is_some()
    }

    /// Board slot a target word fills
    #[must_use]
    pub fn slot_of(&self, word: &str) -> Option<SlotRef> {
        let length = word.chars().count();
        self.words_of_length(length)
            .iter()
            .position(|w| w == word)
            .map(|slot| SlotRef { length, slot })
    }

    /// Blank board for rendering
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        BoardLayout {
            groups: self
                .groups
                .iter()
                .map(|(&length, words)| GroupLayout {
                    length,
                    slots: words.len(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_one() -> Level {
        Level::new([
            "WIG", "HIT", "SIT", "TWIG", "THIN", "WING", "NIGHT", "THING", "STING",
        ])
    }

    #[test]
    fn groups_by_length_in_order() {
        let level = level_one();
        assert_eq!(level.lengths().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(level.words_of_length(4), &["TWIG", "THIN", "WING"]);
        assert!(level.words_of_length(6).is_empty());
    }

    #[test]
    fn words_are_uppercased() {
        let level = Level::new(["wig", " Hit "]);
        assert!(level.contains("WIG"));
        assert!(level.contains("HIT"));
        assert!(!level.contains("wig"));
    }

    #[test]
    fn slot_lookup() {
        let level = level_one();
        assert_eq!(
            level.slot_of("WIG"),
            Some(SlotRef { length: 3, slot: 0 })
        );
        assert_eq!(
            level.slot_of("STING"),
            Some(SlotRef { length: 5, slot: 2 })
        );
        assert_eq!(level.slot_of("ZZZ"), None);
        assert_eq!(level.slot_of(""), None);
    }

    #[test]
    fn layout_counts_slots_and_cells() {
        let layout = level_one().layout();
        assert_eq!(
            layout.groups,
            vec![
                GroupLayout { length: 3, slots: 3 },
                GroupLayout { length: 4, slots: 3 },
                GroupLayout { length: 5, slots: 3 },
            ]
        );
        assert_eq!(layout.total_slots(), 9);
        assert_eq!(layout.total_cells(), 9 + 12 + 15);
        assert_eq!(layout.groups[2].blank_cells(), 15);
    }

    #[test]
    fn all_words_shortest_first() {
        let level = Level::new(["NIGHT", "WIG", "TWIG"]);
        assert_eq!(
            level.all_words().collect::<Vec<_>>(),
            vec!["WIG", "TWIG", "NIGHT"]
        );
        assert_eq!(level.word_count(), 3);
    }
}
