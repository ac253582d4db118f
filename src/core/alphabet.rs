//! The shared letter alphabet and tile shuffling

use super::LetterCounts;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Fixed, ordered sequence of letters shared by every level
///
/// Letters are stored uppercase. Duplicates are allowed; the alphabet is a
/// multiset and each copy becomes its own tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one letter")]
    Empty,
    #[error("alphabet contains non-letter character {0:?}")]
    InvalidLetter(char),
}

impl Alphabet {
    /// Create an alphabet from letters
    ///
    /// # Errors
    /// Returns `AlphabetError` if no letters are given or any character is not
    /// an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use letter_slots::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("ighnstw".chars()).unwrap();
    /// assert_eq!(alphabet.letters(), &['I', 'G', 'H', 'N', 'S', 'T', 'W']);
    ///
    /// assert!(Alphabet::new("ab1".chars()).is_err());
    /// ```
    pub fn new<I: IntoIterator<Item = char>>(letters: I) -> Result<Self, AlphabetError> {
        let letters = letters
            .into_iter()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase())
                } else {
                    Err(AlphabetError::InvalidLetter(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if letters.is_empty() {
            return Err(AlphabetError::Empty);
        }

        Ok(Self { letters })
    }

    /// Letters in catalog order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (and therefore tiles)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed alphabet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter multiset of the alphabet
    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        LetterCounts::from_letters(self.letters.iter().copied())
    }

    /// A freshly shuffled copy of the letters
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<char> {
        let mut tiles = self.letters.clone();
        shuffle(&mut tiles, rng);
        tiles
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Unbiased Fisher–Yates shuffle
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn default_alphabet() -> Alphabet {
        Alphabet::new("IGHNSTW".chars()).unwrap()
    }

    #[test]
    fn alphabet_normalizes_case() {
        let alphabet = Alphabet::new("iGh".chars()).unwrap();
        assert_eq!(alphabet.letters(), &['I', 'G', 'H']);
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn alphabet_rejects_empty() {
        assert_eq!(Alphabet::new("".chars()), Err(AlphabetError::Empty));
    }

    #[test]
    fn alphabet_rejects_non_letters() {
        assert_eq!(
            Alphabet::new("AB C".chars()),
            Err(AlphabetError::InvalidLetter(' '))
        );
        assert_eq!(
            Alphabet::new("A7".chars()),
            Err(AlphabetError::InvalidLetter('7'))
        );
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let alphabet = default_alphabet();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let tiles = alphabet.shuffled(&mut rng);
            assert_eq!(tiles.len(), alphabet.len());
            assert_eq!(
                LetterCounts::from_letters(tiles.iter().copied()),
                alphabet.counts()
            );
        }
    }

    #[test]
    fn shuffle_keeps_duplicates() {
        let alphabet = Alphabet::new("AABC".chars()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let tiles = alphabet.shuffled(&mut rng);
        assert_eq!(tiles.iter().filter(|&&c| c == 'A').count(), 2);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let alphabet = default_alphabet();
        let first = alphabet.shuffled(&mut StdRng::seed_from_u64(42));
        let second = alphabet.shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_reaches_every_position() {
        // Each letter should land in each slot at least once over many shuffles
        let alphabet = default_alphabet();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [[false; 7]; 7];

        for _ in 0..2000 {
            let tiles = alphabet.shuffled(&mut rng);
            for (pos, letter) in tiles.iter().enumerate() {
                let idx = alphabet.letters().iter().position(|c| c == letter).unwrap();
                seen[idx][pos] = true;
            }
        }

        assert!(seen.iter().all(|row| row.iter().all(|&hit| hit)));
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [char; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut single = ['A'];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, ['A']);
    }

    #[test]
    fn alphabet_display() {
        assert_eq!(default_alphabet().to_string(), "I G H N S T W");
    }
}
