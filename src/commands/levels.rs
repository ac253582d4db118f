//! Catalog listing command

use crate::catalog::LevelCatalog;
use crate::output::write_catalog;
use std::io::{self, Write};

/// Print the catalog and its validation summary
///
/// Catalogs are validated when loaded, so reaching this point means every
/// level passed.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_levels<W: Write>(catalog: &LevelCatalog, out: &mut W) -> io::Result<()> {
    log::info!(
        "listing {} levels over {} tiles",
        catalog.level_count(),
        catalog.alphabet().len()
    );
    write_catalog(out, catalog)
}
