pub mod catalog;
pub mod constants;
pub mod pipeline;
pub mod spyglass;
pub mod spyglass_errors;
pub mod time;

pub use crate::catalog::csv_reader::CatalogFile;
pub use crate::catalog::record::{CatalogEntry, PlanetRecord};
pub use crate::constants::{Constants, PlanetTable, RawCatalog};
pub use crate::pipeline::denylist::Denylist;
pub use crate::spyglass::Spyglass;
pub use crate::spyglass_errors::SpyglassError;
