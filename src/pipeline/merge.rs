//! # Catalog merge: union, recency sort, and per-field fold
//!
//! First pipeline stage. Takes the two raw solution subsets delivered by the
//! archive (default solutions and alternate solutions, same schema), and
//! collapses them into one canonical [`PlanetRecord`] per planet.
//!
//! ## Steps
//! -----------------
//! 1. **Union** the two collections, primary first.
//! 2. **Parse** every publication date (see [`crate::time::parse_pub_date`]).
//!    A date that matches no known layout aborts the run: the whole stage
//!    rests on a total recency order, and the parse runs before the exclusion
//!    filter, so even a denylisted record with a broken date is fatal.
//! 3. **Filter** out records whose reference is denylisted.
//! 4. **Sort** by parsed date, most recent first. The sort is stable, so
//!    records published at the same date keep their ingestion order and the
//!    output is reproducible bit for bit.
//! 5. **Fold** each planet's group of solutions into one record: for every
//!    field, the value of the most recent solution that reports it.
//!
//! ## The fold is field-generic
//! -----------------
//! No column is special-cased. A single reducer ([`most_recent`]) is applied
//! to every field through one enumeration of the schema
//! ([`fold_fields!`](macro@crate::fold_fields)); adding a column to the record
//! types means adding one identifier there and nothing else.
//!
//! ## Output order
//! -----------------
//! One record per distinct planet name, in first-encounter order of the
//! sorted collection (i.e. planets with the most recent publications come
//! first). Planets whose every solution is denylisted do not appear.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ahash::RandomState;
use hifitime::Epoch;
use itertools::Itertools;
use smallvec::smallvec;

use crate::catalog::record::{CatalogEntry, PlanetRecord};
use crate::constants::{PlanetName, PlanetTable, RawCatalog, SolutionGroup};
use crate::pipeline::denylist::Denylist;
use crate::spyglass_errors::SpyglassError;
use crate::time::parse_pub_date;

pub(crate) type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// A raw entry paired with its parsed publication date.
struct DatedEntry {
    epoch: Epoch,
    entry: CatalogEntry,
}

/// Apply the most-recent-non-null reducer to every enumerated field of a
/// sorted solution group, producing the aggregated record.
#[macro_export]
macro_rules! fold_fields {
    ($group:expr, { $($field:ident),* $(,)? }) => {{
        $crate::catalog::record::PlanetRecord {
            planet_name: $group[0].planet_name.clone(),
            pub_date: $group[0].pub_date.clone(),
            $( $field: $crate::pipeline::merge::most_recent($group, |entry| entry.$field.clone()), )*
            ..$crate::catalog::record::PlanetRecord::default()
        }
    }};
}

/// First non-null value of one field over a group sorted most-recent-first.
///
/// Arguments
/// ---------
/// * `group`: a planet's solutions, already in descending date order
/// * `field`: accessor extracting the field from one solution
///
/// Return
/// ------
/// * the most recent reported value, or `None` if no solution reports it
pub fn most_recent<T>(
    group: &[CatalogEntry],
    field: impl Fn(&CatalogEntry) -> Option<T>,
) -> Option<T> {
    group.iter().find_map(field)
}

/// Union, deduplicate, and fold the two raw solution subsets.
///
/// Arguments
/// ---------
/// * `primary`: the default-solution subset
/// * `alternate`: the alternate-solution subset, same schema
/// * `denylist`: reference strings whose records must not contribute
///
/// Return
/// ------
/// * one [`PlanetRecord`] per distinct surviving planet name, or a
///   [`SpyglassError::InvalidPublicationDate`] if any record's date fails to
///   parse
pub fn merge_catalogs(
    primary: RawCatalog,
    alternate: RawCatalog,
    denylist: &Denylist,
) -> Result<PlanetTable, SpyglassError> {
    let mut dated = Vec::with_capacity(primary.len() + alternate.len());
    for entry in primary.into_iter().chain(alternate) {
        let epoch = parse_pub_date(&entry.pub_date)?;
        dated.push(DatedEntry { epoch, entry });
    }
    let unioned = dated.len();

    // Stable sort: equal dates keep ingestion order.
    let sorted = dated
        .into_iter()
        .filter(|dated| !denylist.excludes(dated.entry.reference.as_deref()))
        .sorted_by(|a, b| b.epoch.cmp(&a.epoch));

    // Group by planet name, preserving first-encounter order.
    let mut group_index: FastHashMap<PlanetName, usize> = FastHashMap::default();
    let mut groups: Vec<SolutionGroup> = Vec::new();
    let mut kept = 0usize;
    for dated in sorted {
        kept += 1;
        match group_index.entry(dated.entry.planet_name.clone()) {
            Entry::Occupied(slot) => groups[*slot.get()].push(dated.entry),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(smallvec![dated.entry]);
            }
        }
    }

    log::info!(
        "merged {unioned} raw solutions into {} planets ({} denylisted)",
        groups.len(),
        unioned - kept
    );

    Ok(groups.iter().map(|group| fold_group(group)).collect())
}

/// Fold one planet's solutions (sorted most-recent-first) into its record.
fn fold_group(group: &SolutionGroup) -> PlanetRecord {
    fold_fields!(group, {
        host_name,
        default_flag,
        star_count,
        planet_count,
        discovery_method,
        discovery_year,
        discovery_facility,
        solution_type,
        reference,
        period,
        semi_major_axis,
        radius,
        radius_jup,
        mass,
        mass_jup,
        eccentricity,
        insolation,
        eq_temp,
        inclination,
        transit_duration,
        ratio_a_rstar,
        ratio_r_rstar,
        occultation_depth,
        star_reference,
        spectral_type,
        star_eff_temp,
        star_radius,
        star_mass,
        metallicity,
        metallicity_ratio,
        star_log_gravity,
        system_reference,
        ra,
        dec,
        distance,
        vmag,
        jmag,
        hmag,
        kmag,
        gaia_mag,
    })
}

#[cfg(test)]
mod merge_test {
    use super::*;

    fn entry(name: &str, date: &str) -> CatalogEntry {
        CatalogEntry {
            planet_name: name.to_string(),
            pub_date: date.to_string(),
            ..CatalogEntry::default()
        }
    }

    #[test]
    fn test_most_recent_takes_first_non_null() {
        let mut newest = entry("x", "2021-01");
        newest.radius = None;
        let mut older = entry("x", "2019-01");
        older.radius = Some(2.0);

        let group: SolutionGroup = smallvec![newest, older];
        assert_eq!(most_recent(&group, |e| e.radius), Some(2.0));
        assert_eq!(most_recent(&group, |e| e.mass), None);
    }

    #[test]
    fn test_fold_keeps_most_recent_date() {
        let group: SolutionGroup = smallvec![entry("x", "2021-01"), entry("x", "2019-01")];
        let folded = fold_group(&group);
        assert_eq!(folded.planet_name, "x");
        assert_eq!(folded.pub_date, "2021-01");
    }

    #[test]
    fn test_bad_date_aborts_merge() {
        let result = merge_catalogs(
            vec![entry("x", "sometime in 2021")],
            vec![],
            &Denylist::empty(),
        );
        assert!(matches!(
            result,
            Err(SpyglassError::InvalidPublicationDate(_))
        ));
    }
}
