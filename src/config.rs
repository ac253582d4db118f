//! Run configuration shared by every front end

use crate::catalog::{LevelCatalog, loader};
use crate::puzzle::PuzzleState;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Settings collected from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Catalog file; the embedded catalog is used when absent
    pub catalog_path: Option<PathBuf>,
    /// Seed for the tile shuffle
    pub seed: Option<u64>,
    /// 0-based level to start at
    pub start_level: usize,
}

impl GameConfig {
    /// Load the configured catalog
    ///
    /// # Errors
    /// Returns an error if the catalog file cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<LevelCatalog> {
        match &self.catalog_path {
            Some(path) => loader::load_from_file(path)
                .with_context(|| format!("failed to load catalog from {}", path.display())),
            None => Ok(LevelCatalog::embedded()),
        }
    }

    /// Build a fresh session positioned at the configured level
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded or the start level
    /// does not exist.
    pub fn new_session(&self) -> Result<PuzzleState> {
        let catalog = self.load_catalog()?;
        self.session_for(catalog)
    }

    /// Build a fresh session over an already loaded catalog
    ///
    /// # Errors
    /// Returns an error if the start level does not exist.
    pub fn session_for(&self, catalog: LevelCatalog) -> Result<PuzzleState> {
        let mut state = match self.seed {
            Some(seed) => PuzzleState::with_seed(catalog, seed),
            None => PuzzleState::new(catalog),
        };

        if self.start_level > 0 {
            state
                .start_level(self.start_level)
                .context("invalid start level")?;
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_embedded_catalog() {
        let config = GameConfig::default();
        assert_eq!(config.load_catalog().unwrap(), LevelCatalog::embedded());
    }

    #[test]
    fn start_level_is_applied() {
        let config = GameConfig {
            start_level: 1,
            seed: Some(3),
            ..GameConfig::default()
        };
        let state = config.new_session().unwrap();
        assert_eq!(state.level_index(), 1);
    }

    #[test]
    fn out_of_range_start_level_fails() {
        let config = GameConfig {
            start_level: 5,
            ..GameConfig::default()
        };
        let err = config.new_session().err().unwrap();
        assert!(format!("{err:#}").contains("out of range"));
    }

    #[test]
    fn seeded_sessions_match() {
        let config = GameConfig {
            seed: Some(12),
            ..GameConfig::default()
        };
        let a = config.new_session().unwrap();
        let b = config.new_session().unwrap();
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn missing_catalog_file_reports_path() {
        let config = GameConfig {
            catalog_path: Some(PathBuf::from("/no/such/levels.txt")),
            ..GameConfig::default()
        };
        let err = config.load_catalog().unwrap_err();
        assert!(err.to_string().contains("/no/such/levels.txt"));
    }
}
