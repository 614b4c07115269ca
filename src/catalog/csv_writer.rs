//! Aggregated table persistence.
//!
//! Writes the final planet table to CSV, headers included, with the
//! archive-compatible column names declared on
//! [`PlanetRecord`](crate::catalog::record::PlanetRecord). The choice of
//! format and location belongs to the caller; the pipeline itself never
//! touches the filesystem.

use camino::Utf8Path;

use crate::catalog::record::PlanetRecord;
use crate::spyglass_errors::SpyglassError;

/// Write the aggregated planet table to a CSV file.
///
/// Arguments
/// ---------
/// * `path`: destination file, created or truncated
/// * `table`: the aggregated records, written in table order
///
/// Return
/// ------
/// * `Ok(())` once the file is flushed, or a [`SpyglassError`] on I/O or
///   serialization failure
pub fn write_planet_table(path: &Utf8Path, table: &[PlanetRecord]) -> Result<(), SpyglassError> {
    let mut writer = csv::Writer::from_path(path)?;
    for planet in table {
        writer.serialize(planet)?;
    }
    writer.flush()?;

    log::info!("wrote {} aggregated planets to {path}", table.len());
    Ok(())
}
