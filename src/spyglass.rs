//! # Spyglass: the aggregation pipeline façade
//!
//! This module defines the [`Spyglass`] struct, the central façade that wires
//! together the three pipeline stages:
//!
//! 1. **Merge** ([`crate::pipeline::merge`]): union of the two raw solution
//!    subsets, recency sort, exclusion filter, per-field fold.
//! 2. **Fill** ([`crate::pipeline::fill`]): fallback reconstruction of
//!    missing radius, mass, and equilibrium temperature.
//! 3. **Metrics** ([`crate::pipeline::metrics`]): TSM, ESM, and companions.
//!
//! The façade owns the whole configuration surface: the reference
//! [`Denylist`] and the tunable physical [`Constants`]. Everything else about
//! the pipeline behavior is fixed.
//!
//! The pipeline is a pure batch transform. It holds no state across runs,
//! performs no I/O, and never blocks; feeding it identical raw collections
//! yields an identical output table. Fetching the raw catalog and persisting
//! the result are the callers' business (see
//! [`CatalogFile`](crate::catalog::csv_reader::CatalogFile) and
//! [`write_planet_table`](crate::catalog::csv_writer::write_planet_table) for
//! the CSV adapters).
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use camino::Utf8Path;
//! use spyglass::{CatalogFile, RawCatalog, Spyglass};
//!
//! # fn demo() -> Result<(), spyglass::SpyglassError> {
//! let primary = RawCatalog::new_from_csv(Utf8Path::new("ps_default.csv"))?;
//! let alternate = RawCatalog::new_from_csv(Utf8Path::new("ps_alternate.csv"))?;
//!
//! let table = Spyglass::new().run(primary, alternate)?;
//!
//! spyglass::catalog::csv_writer::write_planet_table(
//!     Utf8Path::new("aggregated_data.csv"),
//!     &table,
//! )?;
//! # Ok(()) }
//! ```

use crate::constants::{Constants, PlanetTable, RawCatalog};
use crate::pipeline::denylist::Denylist;
use crate::pipeline::fill::fill_missing;
use crate::pipeline::merge::merge_catalogs;
use crate::pipeline::metrics::compute_metrics;
use crate::spyglass_errors::SpyglassError;

#[derive(Debug, Clone, Default)]
pub struct Spyglass {
    constants: Constants,
    denylist: Denylist,
}

impl Spyglass {
    /// Construct a pipeline with the default denylist and constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reference denylist.
    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    /// Replace the tunable physical constants.
    pub fn with_constants(mut self, constants: Constants) -> Self {
        self.constants = constants;
        self
    }

    /// Mutable access to the denylist, for incremental extension.
    pub fn denylist_mut(&mut self) -> &mut Denylist {
        &mut self.denylist
    }

    /// Run the full pipeline over the two raw solution subsets.
    ///
    /// Arguments
    /// ---------
    /// * `primary`: the default-solution subset of the raw catalog
    /// * `alternate`: the alternate-solution subset, same schema
    ///
    /// Return
    /// ------
    /// * the aggregated planet table with all derived fields attached, or a
    ///   [`SpyglassError`] if a publication date fails to parse
    pub fn run(
        &self,
        primary: RawCatalog,
        alternate: RawCatalog,
    ) -> Result<PlanetTable, SpyglassError> {
        let mut table = merge_catalogs(primary, alternate, &self.denylist)?;
        fill_missing(&mut table, &self.constants);
        compute_metrics(&mut table, &self.constants);

        log::info!("pipeline complete, {} planets scored", table.len());
        Ok(table)
    }
}
