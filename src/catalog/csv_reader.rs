//! # Raw catalog ingestion from CSV exports
//!
//! Archive queries deliver the `ps` table as CSV, one file per solution subset
//! (default solutions and alternate solutions). This module reads such exports
//! into a [`RawCatalog`] through the [`CatalogFile`] trait.
//!
//! ## Schema handling
//! -----------------
//! Deserialization is header-driven: columns are matched by name, unknown
//! columns are ignored, and an empty cell becomes `None`. The two columns the
//! pipeline cannot work without (`pl_name`, `pl_pubdate`) are checked up front
//! so a truncated export fails with a [`SpyglassError::MissingColumn`] instead
//! of a row-level deserialization error.
//!
//! ## Duplicates
//! -----------------
//! No deduplication is performed here. Duplicate planet entries are the
//! expected shape of the input and are collapsed later by the merge stage.

use camino::Utf8Path;

use crate::catalog::record::CatalogEntry;
use crate::constants::RawCatalog;
use crate::spyglass_errors::SpyglassError;

/// Columns the pipeline cannot run without.
const REQUIRED_COLUMNS: [&str; 2] = ["pl_name", "pl_pubdate"];

/// Constructors and appenders turning archive CSV exports into a [`RawCatalog`].
pub trait CatalogFile {
    /// Create a new raw catalog from a CSV export.
    ///
    /// Arguments
    /// ---------
    /// * `path`: path to the CSV file, headers expected on the first line
    ///
    /// Return
    /// ------
    /// * a [`RawCatalog`] with one entry per row, or a [`SpyglassError`] if the
    ///   file cannot be read or a required column is missing
    fn new_from_csv(path: &Utf8Path) -> Result<Self, SpyglassError>
    where
        Self: Sized;

    /// Append the rows of a CSV export to an existing raw catalog.
    ///
    /// Arguments
    /// ---------
    /// * `path`: path to the CSV file, headers expected on the first line
    fn add_from_csv(&mut self, path: &Utf8Path) -> Result<(), SpyglassError>;
}

impl CatalogFile for RawCatalog {
    fn new_from_csv(path: &Utf8Path) -> Result<Self, SpyglassError> {
        let mut catalog = RawCatalog::new();
        read_catalog_csv(&mut catalog, path)?;
        Ok(catalog)
    }

    fn add_from_csv(&mut self, path: &Utf8Path) -> Result<(), SpyglassError> {
        read_catalog_csv(self, path)
    }
}

/// Shared reading routine behind both [`CatalogFile`] methods.
fn read_catalog_csv(catalog: &mut RawCatalog, path: &Utf8Path) -> Result<(), SpyglassError> {
    let mut reader = csv::Reader::from_path(path)?;
    check_required_columns(reader.headers()?)?;

    let before = catalog.len();
    for row in reader.deserialize() {
        let entry: CatalogEntry = row?;
        catalog.push(entry);
    }

    log::info!("read {} catalog rows from {path}", catalog.len() - before);
    Ok(())
}

fn check_required_columns(headers: &csv::StringRecord) -> Result<(), SpyglassError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(SpyglassError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}
