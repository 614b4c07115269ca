//! # Constants and type definitions for Spyglass
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `Spyglass` library, together with the [`Constants`] struct
//! that exposes the tunable subset of them to the pipeline.
//!
//! ## Overview
//!
//! - Planetary, stellar, and fundamental physical constants
//! - Unit conversions (Jupiter ↔ Earth radii and masses, AU ↔ solar radii)
//! - Core type aliases used across the crate
//! - Container types for raw catalog rows and aggregated planet records
//!
//! These definitions are used by all main modules, including merging, fallback filling,
//! and metric derivation.

use crate::catalog::record::{CatalogEntry, PlanetRecord};
use smallvec::SmallVec;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Earth equatorial radius in meters (IAU 2015 nominal)
pub const EARTH_RADIUS_M: f64 = 6.3781e6;

/// Jupiter equatorial radius in meters (IAU 2015 nominal)
pub const JUPITER_RADIUS_M: f64 = 7.1492e7;

/// Sun radius in meters (IAU 2015 nominal)
pub const SUN_RADIUS_M: f64 = 6.957e8;

/// Earth mass in kilograms
pub const EARTH_MASS_KG: f64 = 5.9722e24;

/// Jupiter mass in kilograms
pub const JUPITER_MASS_KG: f64 = 1.89813e27;

/// Jupiter radius expressed in Earth radii
pub const RJUP_IN_REARTH: f64 = JUPITER_RADIUS_M / EARTH_RADIUS_M;

/// Jupiter mass expressed in Earth masses
pub const MJUP_IN_MEARTH: f64 = JUPITER_MASS_KG / EARTH_MASS_KG;

/// Earth radius expressed in solar radii
pub const REARTH_IN_RSUN: f64 = EARTH_RADIUS_M / SUN_RADIUS_M;

/// Astronomical Unit expressed in solar radii (rounded as in the archive aggregation)
pub const AU_IN_RSUN: f64 = 215.0;

/// Planck constant in J·s (SI 2019 exact)
pub const PLANCK: f64 = 6.62607015e-34;

/// Speed of light in m/s (SI exact)
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// Boltzmann constant in J/K (SI 2019 exact)
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Newtonian gravitational constant in m³·kg⁻¹·s⁻² (CODATA 2018)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Reference wavelength for the emission metric, 7.5 µm in meters
pub const ESM_WAVELENGTH: f64 = 7.5e-6;

/// Dayside temperature multiplier applied to the equilibrium temperature
pub const DAYSIDE_TEMP_FACTOR: f64 = 1.1;

/// Normalization of the emission metric against the reference target
pub const ESM_REFERENCE_SCALE: f64 = 4.29;

/// Equilibrium temperature of an Earth-insolation blackbody, in Kelvin
pub const TEQ_INSOLATION_COEFF: f64 = 278.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Temperature in Kelvin
pub type Kelvin = f64;
/// Length in meters
pub type Meter = f64;
/// Planet radius in Earth radii
pub type EarthRadii = f64;
/// Planet mass in Earth masses
pub type EarthMasses = f64;
/// Stellar radius in solar radii
pub type SolarRadii = f64;
/// Orbital distance in astronomical units
pub type Au = f64;
/// Apparent magnitude in some photometric band
pub type Magnitude = f64;
/// Planet name, the identity key of the catalog
pub type PlanetName = String;

// -------------------------------------------------------------------------------------------------
// Data containers
// -------------------------------------------------------------------------------------------------

/// A raw catalog: one [`CatalogEntry`] per published solution, duplicates allowed.
pub type RawCatalog = Vec<CatalogEntry>;

/// The aggregated output table: one [`PlanetRecord`] per distinct planet.
pub type PlanetTable = Vec<PlanetRecord>;

/// A small, inline-optimized container for the solutions of a single planet.
pub type SolutionGroup = SmallVec<[CatalogEntry; 4]>;

// -------------------------------------------------------------------------------------------------
// Tunable constants
// -------------------------------------------------------------------------------------------------

/// The tunable physical constants of the pipeline.
///
/// All fields default to the crate-level constants above; overriding them is only
/// meant for sensitivity studies or alternative instrument assumptions. Everything
/// else about the formulas is fixed.
#[derive(Debug, Clone)]
pub struct Constants {
    /// Jupiter radius in Earth radii, used for radius unit reconciliation.
    pub jupiter_to_earth_radius: f64,
    /// Jupiter mass in Earth masses, used for mass unit reconciliation.
    pub jupiter_to_earth_mass: f64,
    /// Earth radius in solar radii, used for the transit ratio.
    pub earth_to_sun_radius: f64,
    /// AU to solar radii conversion for the a/Rs reconstruction.
    pub au_to_solar_radii: f64,
    /// Planck constant, J·s.
    pub planck: f64,
    /// Speed of light, m/s.
    pub speed_of_light: f64,
    /// Boltzmann constant, J/K.
    pub boltzmann: f64,
    /// Wavelength at which the emission metric is evaluated, meters.
    pub esm_wavelength: Meter,
    /// Dayside temperature multiplier on the equilibrium temperature.
    pub dayside_temp_factor: f64,
    /// Overall normalization of the emission metric.
    pub esm_reference_scale: f64,
    /// Coefficient of the insolation-based equilibrium temperature, Kelvin.
    pub teq_insolation_coeff: Kelvin,
}

impl Default for Constants {
    fn default() -> Self {
        Constants {
            jupiter_to_earth_radius: RJUP_IN_REARTH,
            jupiter_to_earth_mass: MJUP_IN_MEARTH,
            earth_to_sun_radius: REARTH_IN_RSUN,
            au_to_solar_radii: AU_IN_RSUN,
            planck: PLANCK,
            speed_of_light: SPEED_OF_LIGHT,
            boltzmann: BOLTZMANN,
            esm_wavelength: ESM_WAVELENGTH,
            dayside_temp_factor: DAYSIDE_TEMP_FACTOR,
            esm_reference_scale: ESM_REFERENCE_SCALE,
            teq_insolation_coeff: TEQ_INSOLATION_COEFF,
        }
    }
}
