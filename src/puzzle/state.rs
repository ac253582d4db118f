//! Puzzle session state machine

use super::buffer::{TileId, TypedBuffer};
use super::outcome::{
    Board, BoardGroup, LevelComplete, LevelStart, Phase, PuzzleError, Reveal, Submission, Verdict,
};
use crate::catalog::LevelCatalog;
use crate::core::Level;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHashSet};

/// One play session over a catalog
///
/// Owns the catalog, the tile shuffle RNG and every piece of progress. The
/// presentation adapter is the only caller and drives it through the five
/// operations: `start_level`, `press_letter`, `delete_letter`, `submit_word`
/// and `advance_level`.
pub struct PuzzleState {
    catalog: LevelCatalog,
    rng: StdRng,
    level_index: usize,
    level: Level,
    tiles: Vec<char>,
    buffer: TypedBuffer,
    found: FxHashSet<String>,
    /// Words claimed in completed levels, with the level that claimed them
    past: FxHashMap<String, usize>,
    phase: Phase,
}

impl PuzzleState {
    /// Start a session at level 0 with an OS-seeded shuffle
    #[must_use]
    pub fn new(catalog: LevelCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Start a session with a reproducible shuffle
    #[must_use]
    pub fn with_seed(catalog: LevelCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    /// Start a session at level 0 using the given RNG
    #[must_use]
    pub fn with_rng(catalog: LevelCatalog, mut rng: StdRng) -> Self {
        let level = catalog.first_level().clone();
        let tiles = catalog.alphabet().shuffled(&mut rng);
        let buffer = TypedBuffer::with_capacity(catalog.alphabet().len());

        info!(
            "session started: {} levels, tiles {:?}",
            catalog.level_count(),
            tiles
        );

        Self {
            catalog,
            rng,
            level_index: 0,
            level,
            tiles,
            buffer,
            found: FxHashSet::default(),
            past: FxHashMap::default(),
            phase: Phase::Playing,
        }
    }

    /// Enter the level at `level_index`
    ///
    /// Words found so far move into the cross-level history, the buffer is
    /// cleared and the alphabet is reshuffled.
    ///
    /// # Errors
    /// Returns `PuzzleError::GameOver` once the final level is cleared and
    /// `PuzzleError::InvalidLevel` if the index is outside the catalog. The
    /// state is left untouched in both cases.
    pub fn start_level(&mut self, level_index: usize) -> Result<LevelStart, PuzzleError> {
        if self.phase == Phase::GameComplete {
            return Err(PuzzleError::GameOver);
        }
        let Some(level) = self.catalog.level_at(level_index).cloned() else {
            return Err(PuzzleError::InvalidLevel {
                index: level_index,
                count: self.catalog.level_count(),
            });
        };

        let previous = self.level_index;
        for word in self.found.drain() {
            self.past.entry(word).or_insert(previous);
        }
        self.buffer.clear();
        self.level_index = level_index;
        self.level = level;
        self.tiles = self.catalog.alphabet().shuffled(&mut self.rng);
        self.phase = Phase::Playing;

        info!(
            "level {} started: {} target words, tiles {:?}",
            level_index + 1,
            self.level.word_count(),
            self.tiles
        );

        Ok(self.level_start())
    }

    /// Type the letter on `tile`
    ///
    /// Ignored when the buffer is full, the tile is already used, the tile is
    /// not on the board, or the level is over. Returns whether the letter was
    /// added.
    pub fn press_letter(&mut self, tile: TileId, letter: char) -> bool {
        if self.phase != Phase::Playing || tile >= self.tiles.len() {
            trace!("press on tile {tile} ignored in {:?}", self.phase);
            return false;
        }

        let applied = self.buffer.push(tile, letter);
        if applied {
            debug!("typed {letter:?} from tile {tile}: {}", self.buffer.word());
        } else {
            trace!("press on tile {tile} ignored: full or used");
        }
        applied
    }

    /// Type whatever letter sits on `tile`
    pub fn press_tile(&mut self, tile: TileId) -> bool {
        match self.tiles.get(tile) {
            Some(&letter) => self.press_letter(tile, letter),
            None => false,
        }
    }

    /// Remove the last typed letter and free its tile
    pub fn delete_letter(&mut self) -> Option<char> {
        let (tile, letter) = self.buffer.pop()?;
        debug!("deleted {letter:?}, tile {tile} released: {}", self.buffer.word());
        Some(letter)
    }

    /// Judge the typed word and clear the buffer
    ///
    /// Checks run in order: past levels, this level, target list. A correct
    /// word that completes the level also carries a [`LevelComplete`] signal.
    /// Returns `None` when the level is already over.
    pub fn submit_word(&mut self) -> Option<Submission> {
        if self.phase != Phase::Playing {
            trace!("submit ignored in {:?}", self.phase);
            return None;
        }

        let word = self.buffer.word();
        self.buffer.clear();

        let (verdict, reveal) = if let Some(&level) = self.past.get(&word) {
            (Verdict::AlreadyFoundPastLevel { level }, None)
        } else if self.found.contains(&word) {
            (Verdict::AlreadyFound, None)
        } else if let Some(slot) = self.level.slot_of(&word) {
            let reveal = Reveal {
                slot,
                cells: word.chars().collect(),
            };
            self.found.insert(word.clone());
            (Verdict::Correct, Some(reveal))
        } else {
            (Verdict::WrongWord, None)
        };

        let completion = if verdict == Verdict::Correct && self.all_found() {
            let is_final_level = self.catalog.is_final(self.level_index);
            self.phase = if is_final_level {
                Phase::GameComplete
            } else {
                Phase::LevelComplete
            };
            info!(
                "level {} complete{}",
                self.level_index + 1,
                if is_final_level { ", game complete" } else { "" }
            );
            Some(LevelComplete {
                level: self.level_index,
                is_final_level,
            })
        } else {
            None
        };

        info!("submitted {word:?}: {verdict:?}");

        Some(Submission {
            word,
            verdict,
            reveal,
            completion,
        })
    }

    /// Move on to the next level
    ///
    /// # Errors
    /// Returns `PuzzleError::NoNextLevel` when already on the last level.
    pub fn advance_level(&mut self) -> Result<LevelStart, PuzzleError> {
        if self.catalog.is_final(self.level_index) {
            return Err(PuzzleError::NoNextLevel {
                current: self.level_index,
            });
        }
        self.start_level(self.level_index + 1)
    }

    fn all_found(&self) -> bool {
        self.level.all_words().all(|w| self.found.contains(w))
    }

    /// Snapshot for drawing the current level from scratch
    #[must_use]
    pub fn level_start(&self) -> LevelStart {
        LevelStart {
            level: self.level_index,
            tiles: self.tiles.clone(),
            layout: self.level.layout(),
        }
    }

    /// Current board with revealed slots filled in
    #[must_use]
    pub fn board(&self) -> Board {
        let groups = self
            .level
            .lengths()
            .map(|length| BoardGroup {
                length,
                slots: self
                    .level
                    .words_of_length(length)
                    .iter()
                    .map(|w| self.found.contains(w).then(|| w.clone()))
                    .collect(),
            })
            .collect();
        Board { groups }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// 0-based index of the active level
    #[inline]
    #[must_use]
    pub const fn level_index(&self) -> usize {
        self.level_index
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// Shuffled tiles of the active level
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn is_tile_used(&self, tile: TileId) -> bool {
        self.buffer.is_used(tile)
    }

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &TypedBuffer {
        &self.buffer
    }

    /// Words found in this level, in board order
    pub fn found_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.level.all_words().filter(|w| self.found.contains(*w))
    }

    /// Words claimed in earlier levels with the 0-based level that claimed
    /// them, sorted alphabetically
    #[must_use]
    pub fn past_level_words(&self) -> Vec<(&str, usize)> {
        let mut words: Vec<_> = self.past.iter().map(|(w, &l)| (w.as_str(), l)).collect();
        words.sort_unstable();
        words
    }

    /// Number of words claimed in earlier levels
    #[must_use]
    pub fn past_level_word_count(&self) -> usize {
        self.past.len()
    }

    /// Target words still hidden
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.level.word_count() - self.found.len()
    }
}
