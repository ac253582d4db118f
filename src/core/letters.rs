//! Letter multisets
//!
//! Words are built from a limited pool of tiles, so "can this word be spelled"
//! is a multiset inclusion check.

use rustc_hash::FxHashMap;

/// Count of each letter in a word or alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count letters from any iterator of chars
    ///
    /// Letters are compared case-insensitively and stored uppercase.
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in letters {
            *counts.entry(letter.to_ascii_uppercase()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count letters of a word
    #[must_use]
    pub fn of_word(word: &str) -> Self {
        Self::from_letters(word.chars())
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// First letter (in alphabetical order) that `pool` cannot supply
    ///
    /// `None` means the word can be spelled from the pool.
    #[must_use]
    pub fn first_excess(&self, pool: &Self) -> Option<char> {
        let mut letters: Vec<char> = self.counts.keys().copied().collect();
        letters.sort_unstable();
        letters
            .into_iter()
            .find(|&letter| self.get(letter) > pool.get(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let counts = LetterCounts::of_word("SITTING");
        assert_eq!(counts.get('T'), 2);
        assert_eq!(counts.get('I'), 2);
        assert_eq!(counts.get('S'), 1);
        assert_eq!(counts.get('Z'), 0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let counts = LetterCounts::of_word("wig");
        assert_eq!(counts.get('W'), 1);
        assert_eq!(counts.get('w'), 1);
    }

    #[test]
    fn word_fits_within_pool() {
        let pool = LetterCounts::of_word("IGHNSTW");
        assert_eq!(LetterCounts::of_word("NIGHT").first_excess(&pool), None);
        assert_eq!(LetterCounts::of_word("TWIG").first_excess(&pool), None);
        assert_eq!(LetterCounts::of_word("").first_excess(&pool), None);
    }

    #[test]
    fn multiplicity_is_enforced() {
        let pool = LetterCounts::of_word("IGHNSTW");
        // Two Ts, only one tile
        assert_eq!(LetterCounts::of_word("TINT").first_excess(&pool), Some('T'));
        assert_eq!(LetterCounts::of_word("ZZZ").first_excess(&pool), Some('Z'));
    }

    #[test]
    fn long_runs_of_one_letter_are_counted() {
        let counts = LetterCounts::of_word(&"A".repeat(300));
        assert_eq!(counts.get('A'), 300);
        let pool = LetterCounts::of_word(&"A".repeat(256));
        assert_eq!(counts.first_excess(&pool), Some('A'));
    }

    #[test]
    fn first_excess_is_alphabetical() {
        let pool = LetterCounts::of_word("A");
        assert_eq!(LetterCounts::of_word("ZYX").first_excess(&pool), Some('X'));
    }
}
