//! # Catalog row types
//!
//! This module defines the two record types the pipeline is built around:
//!
//! 1. [`CatalogEntry`]: one raw archive row, i.e. the parameter set published by
//!    **one reference** for **one planet**. The same planet usually appears many
//!    times, once per publication.
//! 2. [`PlanetRecord`]: one aggregated row per distinct planet, produced by the
//!    merge stage and enriched in place by the fill and metric stages.
//!
//! ## Schema
//! -----------------
//! Field names follow the crate's own vocabulary; the serde renames map them to
//! the archive's `ps`-table column names (`pl_rade`, `st_teff`, `sy_jmag`, ...),
//! so raw CSV exports deserialize directly and the aggregated output stays
//! readable by downstream archive-aware tooling.
//!
//! Only the planet name and the publication date are required. Every other
//! field may be absent: the archive publishes partial solutions routinely, and
//! the whole point of the aggregation is to stitch the gaps across references.
//!
//! ## See also
//! ------------
//! * [`crate::pipeline::merge`] – Folds many [`CatalogEntry`] into one [`PlanetRecord`].
//! * [`crate::pipeline::fill`] – Fallback rules for missing physical quantities.
//! * [`crate::pipeline::metrics`] – Derived observability metrics.

use serde::{Deserialize, Serialize};

use crate::constants::{
    Au, EarthMasses, EarthRadii, Kelvin, Magnitude, PlanetName, SolarRadii,
};

/// One raw catalog row: the parameters published by a single reference for a
/// single planet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogEntry {
    /// Planet name, the identity key of the whole pipeline.
    #[serde(rename = "pl_name")]
    pub planet_name: PlanetName,
    #[serde(rename = "hostname")]
    pub host_name: Option<String>,
    /// 1 when the archive marks this row as the default solution for the planet.
    #[serde(rename = "default_flag")]
    pub default_flag: Option<u8>,
    #[serde(rename = "sy_snum")]
    pub star_count: Option<u32>,
    #[serde(rename = "sy_pnum")]
    pub planet_count: Option<u32>,
    #[serde(rename = "discoverymethod")]
    pub discovery_method: Option<String>,
    #[serde(rename = "disc_year")]
    pub discovery_year: Option<u32>,
    #[serde(rename = "disc_facility")]
    pub discovery_facility: Option<String>,
    #[serde(rename = "soltype")]
    pub solution_type: Option<String>,
    /// Full reference string of the publication this row comes from. This is
    /// the field the denylist matches against.
    #[serde(rename = "pl_refname")]
    pub reference: Option<String>,
    /// Orbital period in days.
    #[serde(rename = "pl_orbper")]
    pub period: Option<f64>,
    /// Orbital semi-major axis in AU.
    #[serde(rename = "pl_orbsmax")]
    pub semi_major_axis: Option<Au>,
    /// Planet radius in Earth radii.
    #[serde(rename = "pl_rade")]
    pub radius: Option<EarthRadii>,
    /// Planet radius in Jupiter radii.
    #[serde(rename = "pl_radj")]
    pub radius_jup: Option<f64>,
    /// Planet mass (best estimate) in Earth masses.
    #[serde(rename = "pl_bmasse")]
    pub mass: Option<EarthMasses>,
    /// Planet mass (best estimate) in Jupiter masses.
    #[serde(rename = "pl_bmassj")]
    pub mass_jup: Option<f64>,
    #[serde(rename = "pl_orbeccen")]
    pub eccentricity: Option<f64>,
    /// Insolation flux relative to Earth.
    #[serde(rename = "pl_insol")]
    pub insolation: Option<f64>,
    /// Reported equilibrium temperature in Kelvin.
    #[serde(rename = "pl_eqt")]
    pub eq_temp: Option<Kelvin>,
    /// Orbital inclination in degrees.
    #[serde(rename = "pl_orbincl")]
    pub inclination: Option<f64>,
    /// Transit duration in hours.
    #[serde(rename = "pl_trandur")]
    pub transit_duration: Option<f64>,
    /// Ratio of the semi-major axis to the stellar radius (a/Rs).
    #[serde(rename = "pl_ratdor")]
    pub ratio_a_rstar: Option<f64>,
    /// Reported ratio of planet to stellar radius (Rp/Rs).
    #[serde(rename = "pl_ratror")]
    pub ratio_r_rstar: Option<f64>,
    /// Occultation depth in percent.
    #[serde(rename = "pl_occdep")]
    pub occultation_depth: Option<f64>,
    #[serde(rename = "st_refname")]
    pub star_reference: Option<String>,
    #[serde(rename = "st_spectype")]
    pub spectral_type: Option<String>,
    /// Stellar effective temperature in Kelvin.
    #[serde(rename = "st_teff")]
    pub star_eff_temp: Option<Kelvin>,
    /// Stellar radius in solar radii.
    #[serde(rename = "st_rad")]
    pub star_radius: Option<SolarRadii>,
    /// Stellar mass in solar masses.
    #[serde(rename = "st_mass")]
    pub star_mass: Option<f64>,
    /// Stellar metallicity in dex.
    #[serde(rename = "st_met")]
    pub metallicity: Option<f64>,
    /// Metallicity ratio scale, e.g. `[Fe/H]`.
    #[serde(rename = "st_metratio")]
    pub metallicity_ratio: Option<String>,
    /// Stellar surface gravity, log10(cm/s²).
    #[serde(rename = "st_logg")]
    pub star_log_gravity: Option<f64>,
    #[serde(rename = "sy_refname")]
    pub system_reference: Option<String>,
    /// Right ascension in decimal degrees.
    #[serde(rename = "ra")]
    pub ra: Option<f64>,
    /// Declination in decimal degrees.
    #[serde(rename = "dec")]
    pub dec: Option<f64>,
    /// Distance to the system in parsec.
    #[serde(rename = "sy_dist")]
    pub distance: Option<f64>,
    #[serde(rename = "sy_vmag")]
    pub vmag: Option<Magnitude>,
    #[serde(rename = "sy_jmag")]
    pub jmag: Option<Magnitude>,
    #[serde(rename = "sy_hmag")]
    pub hmag: Option<Magnitude>,
    #[serde(rename = "sy_kmag")]
    pub kmag: Option<Magnitude>,
    #[serde(rename = "sy_gaiamag")]
    pub gaia_mag: Option<Magnitude>,
    /// Publication date, in one of three granularities (see [`crate::time::parse_pub_date`]).
    #[serde(rename = "pl_pubdate")]
    pub pub_date: String,
}

/// One aggregated planet: the most recent non-null value of every field across
/// the references that survived the exclusion filter, plus the derived fields
/// attached by the fill and metric stages.
///
/// The aggregated section shares its field names with [`CatalogEntry`] so the
/// merge fold can enumerate them once. The derived section is appended at the
/// end and starts out empty (`None` / unscaled).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanetRecord {
    #[serde(rename = "pl_name")]
    pub planet_name: PlanetName,
    #[serde(rename = "hostname")]
    pub host_name: Option<String>,
    #[serde(rename = "default_flag")]
    pub default_flag: Option<u8>,
    #[serde(rename = "sy_snum")]
    pub star_count: Option<u32>,
    #[serde(rename = "sy_pnum")]
    pub planet_count: Option<u32>,
    #[serde(rename = "discoverymethod")]
    pub discovery_method: Option<String>,
    #[serde(rename = "disc_year")]
    pub discovery_year: Option<u32>,
    #[serde(rename = "disc_facility")]
    pub discovery_facility: Option<String>,
    #[serde(rename = "soltype")]
    pub solution_type: Option<String>,
    #[serde(rename = "pl_refname")]
    pub reference: Option<String>,
    #[serde(rename = "pl_orbper")]
    pub period: Option<f64>,
    #[serde(rename = "pl_orbsmax")]
    pub semi_major_axis: Option<Au>,
    #[serde(rename = "pl_rade")]
    pub radius: Option<EarthRadii>,
    #[serde(rename = "pl_radj")]
    pub radius_jup: Option<f64>,
    #[serde(rename = "pl_bmasse")]
    pub mass: Option<EarthMasses>,
    #[serde(rename = "pl_bmassj")]
    pub mass_jup: Option<f64>,
    #[serde(rename = "pl_orbeccen")]
    pub eccentricity: Option<f64>,
    #[serde(rename = "pl_insol")]
    pub insolation: Option<f64>,
    #[serde(rename = "pl_eqt")]
    pub eq_temp: Option<Kelvin>,
    #[serde(rename = "pl_orbincl")]
    pub inclination: Option<f64>,
    #[serde(rename = "pl_trandur")]
    pub transit_duration: Option<f64>,
    #[serde(rename = "pl_ratdor")]
    pub ratio_a_rstar: Option<f64>,
    #[serde(rename = "pl_ratror")]
    pub ratio_r_rstar: Option<f64>,
    #[serde(rename = "pl_occdep")]
    pub occultation_depth: Option<f64>,
    #[serde(rename = "st_refname")]
    pub star_reference: Option<String>,
    #[serde(rename = "st_spectype")]
    pub spectral_type: Option<String>,
    #[serde(rename = "st_teff")]
    pub star_eff_temp: Option<Kelvin>,
    #[serde(rename = "st_rad")]
    pub star_radius: Option<SolarRadii>,
    #[serde(rename = "st_mass")]
    pub star_mass: Option<f64>,
    #[serde(rename = "st_met")]
    pub metallicity: Option<f64>,
    #[serde(rename = "st_metratio")]
    pub metallicity_ratio: Option<String>,
    #[serde(rename = "st_logg")]
    pub star_log_gravity: Option<f64>,
    #[serde(rename = "sy_refname")]
    pub system_reference: Option<String>,
    #[serde(rename = "ra")]
    pub ra: Option<f64>,
    #[serde(rename = "dec")]
    pub dec: Option<f64>,
    #[serde(rename = "sy_dist")]
    pub distance: Option<f64>,
    #[serde(rename = "sy_vmag")]
    pub vmag: Option<Magnitude>,
    #[serde(rename = "sy_jmag")]
    pub jmag: Option<Magnitude>,
    #[serde(rename = "sy_hmag")]
    pub hmag: Option<Magnitude>,
    #[serde(rename = "sy_kmag")]
    pub kmag: Option<Magnitude>,
    #[serde(rename = "sy_gaiamag")]
    pub gaia_mag: Option<Magnitude>,
    /// Publication date of the most recent contributing reference.
    #[serde(rename = "pl_pubdate")]
    pub pub_date: String,

    // ---- Derived fields, attached by the fill and metric stages -----------------

    /// Filled equilibrium temperature in Kelvin (fallback cascade output).
    #[serde(rename = "pl_Teq")]
    pub teq: Option<Kelvin>,
    /// Rp/Rs recomputed from the filled radius and the stellar radius. The
    /// reported `pl_ratror` is kept untouched above.
    #[serde(rename = "pl_ratror_derived")]
    pub transit_ratio: Option<f64>,
    /// Squared transit ratio (Rp/Rs)², the transit depth.
    #[serde(rename = "pl_rprs2")]
    pub transit_depth: Option<f64>,
    /// Piecewise TSM scale factor; 0 marks an un-sized planet, not a valid scale.
    #[serde(rename = "scale")]
    pub tsm_scale: f64,
    /// Transmission Spectroscopy Metric.
    #[serde(rename = "TSM")]
    pub tsm: Option<f64>,
    /// Dayside emission intermediate of the ESM, in ppm.
    #[serde(rename = "ed_ESM")]
    pub esm_day: Option<f64>,
    /// Emission Spectroscopy Metric.
    #[serde(rename = "ESM")]
    pub esm: Option<f64>,
    /// Planetary surface gravity in m/s², from the filled mass and radius.
    #[serde(rename = "pl_grav")]
    pub gravity: Option<f64>,
}
