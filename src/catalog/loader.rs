//! Catalog file loading
//!
//! A catalog file is line oriented:
//!
//! ```text
//! # comments and blank lines are ignored
//! letters = I G H N S T W
//! level = WIG HIT SIT TWIG THIN WING NIGHT THING STING
//! level = TIN WIN SIN HINT WINS SIGN SWING WHIST SIGHT
//! ```
//!
//! `letters` must appear exactly once, before any `level`. Words on a level
//! line are grouped by length automatically.

use super::{CatalogError, LevelCatalog};
use crate::core::{Alphabet, Level};
use std::fs;
use std::path::Path;

/// Load and validate a catalog from a file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or any parse or
/// validation error from [`parse_catalog`].
///
/// # Examples
/// ```no_run
/// use letter_slots::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("levels.txt").unwrap();
/// println!("Loaded {} levels", catalog.level_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<LevelCatalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse and validate catalog text
///
/// # Errors
///
/// Returns `CatalogError::Parse` for unknown keys, a missing or repeated
/// `letters` line, or a `level` line before `letters`. Validation errors from
/// [`LevelCatalog::new`] are passed through.
///
/// # Examples
/// ```
/// use letter_slots::catalog::loader::parse_catalog;
///
/// let catalog = parse_catalog("letters = A C T\nlevel = CAT ACT").unwrap();
/// assert_eq!(catalog.level_count(), 1);
/// assert_eq!(catalog.alphabet().len(), 3);
/// ```
pub fn parse_catalog(content: &str) -> Result<LevelCatalog, CatalogError> {
    let mut alphabet: Option<Alphabet> = None;
    let mut levels = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(parse_error(line_no, "expected `key = value`"));
        };

        match key.trim().to_ascii_lowercase().as_str() {
            "letters" => {
                if alphabet.is_some() {
                    return Err(parse_error(line_no, "`letters` given more than once"));
                }
                let letters = value.chars().filter(|c| !c.is_whitespace());
                alphabet = Some(Alphabet::new(letters)?);
            }
            "level" => {
                if alphabet.is_none() {
                    return Err(parse_error(line_no, "`level` before `letters`"));
                }
                levels.push(Level::new(value.split_whitespace()));
            }
            other => {
                return Err(parse_error(line_no, &format!("unknown key `{other}`")));
            }
        }
    }

    let alphabet = alphabet.ok_or_else(|| parse_error(0, "missing `letters` line"))?;
    LevelCatalog::new(alphabet, levels)
}

fn parse_error(line: usize, message: &str) -> CatalogError {
    CatalogError::Parse {
        line,
        message: message.to_string(),
    }
}
