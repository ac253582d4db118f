//! Letters typed so far, bound to the tiles they came from

/// Index of a letter tile in the shuffled row
pub type TileId = usize;

/// In-progress word with its originating tiles
///
/// Each entry pairs a letter with its tile, so the number of used tiles always
/// equals the buffer length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedBuffer {
    entries: Vec<(TileId, char)>,
    capacity: usize,
}

impl TypedBuffer {
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Append a letter unless the buffer is full or the tile is taken
    ///
    /// Returns whether the letter was added.
    pub fn push(&mut self, tile: TileId, letter: char) -> bool {
        if self.is_full() || self.is_used(tile) {
            return false;
        }
        self.entries.push((tile, letter.to_ascii_uppercase()));
        true
    }

    /// Remove the last letter, releasing its tile
    pub fn pop(&mut self) -> Option<(TileId, char)> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    #[must_use]
    pub fn is_used(&self, tile: TileId) -> bool {
        self.entries.iter().any(|&(t, _)| t == tile)
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Typed letters in order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|&(_, letter)| letter)
    }

    /// Uppercase word spelled by the buffer
    #[must_use]
    pub fn word(&self) -> String {
        self.letters().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_spell() {
        let mut buffer = TypedBuffer::with_capacity(7);
        assert!(buffer.push(3, 'w'));
        assert!(buffer.push(0, 'I'));
        assert!(buffer.push(5, 'G'));
        assert_eq!(buffer.word(), "WIG");
        assert!([3, 0, 5].iter().all(|&t| buffer.is_used(t)));
        assert!(!buffer.is_used(1));
    }

    #[test]
    fn used_tile_is_rejected() {
        let mut buffer = TypedBuffer::with_capacity(7);
        assert!(buffer.push(1, 'A'));
        assert!(!buffer.push(1, 'A'));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn full_buffer_is_rejected() {
        let mut buffer = TypedBuffer::with_capacity(2);
        assert!(buffer.push(0, 'A'));
        assert!(buffer.push(1, 'B'));
        assert!(buffer.is_full());
        assert!(!buffer.push(2, 'C'));
        assert_eq!(buffer.word(), "AB");
    }

    #[test]
    fn pop_releases_tile() {
        let mut buffer = TypedBuffer::with_capacity(7);
        buffer.push(4, 'T');
        assert_eq!(buffer.pop(), Some((4, 'T')));
        assert!(!buffer.is_used(4));
        assert!(buffer.push(4, 'T'));
    }

    #[test]
    fn pop_empty_is_none() {
        let mut buffer = TypedBuffer::with_capacity(7);
        assert_eq!(buffer.pop(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn used_tiles_track_length() {
        let mut buffer = TypedBuffer::with_capacity(7);
        for (tile, letter) in "NIGHT".chars().enumerate() {
            buffer.push(tile, letter);
            assert_eq!((0..7).filter(|&t| buffer.is_used(t)).count(), buffer.len());
        }
        buffer.pop();
        assert!(!buffer.is_used(4));
        buffer.clear();
        assert!((0..7).all(|t| !buffer.is_used(t)));
    }
}
