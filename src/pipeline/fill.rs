//! # Fallback filling of missing physical quantities
//!
//! Second pipeline stage. Reconstructs missing radius, mass, and equilibrium
//! temperature from fields that are already present. Every rule fills only
//! null targets and never overwrites a reported value.
//!
//! ## Equilibrium temperature cascade
//! -----------------
//! The cascade is an ordered slice of rule functions composed left to right;
//! each rule sees the record as left by the previous ones and only the first
//! hit counts. The order is load-bearing and must not be parallelized:
//!
//! 1. from the insolation flux, Teq = 278 · S^0.25;
//! 2. from the directly reported equilibrium temperature;
//! 3. from a/Rs and the stellar effective temperature, Teq = Tstar / √(2·a/Rs);
//! 4. as 3., with a/Rs rebuilt from the semi-major axis and stellar radius.
//!
//! A rule whose arithmetic comes out non-finite (negative insolation, negative
//! a/Rs) counts as a miss, and the later rules still get their turn.

use crate::catalog::record::PlanetRecord;
use crate::constants::{Constants, EarthMasses, EarthRadii, Kelvin};

/// One equilibrium-temperature fallback source.
type TeqRule = fn(&PlanetRecord, &Constants) -> Option<Kelvin>;

/// Fallback sources in application order.
const TEQ_CASCADE: [TeqRule; 4] = [
    teq_from_insolation,
    teq_reported,
    teq_from_star_ratio,
    teq_from_semi_major_axis,
];

/// Run all fill rules over the aggregated table, in place.
pub fn fill_missing(table: &mut [PlanetRecord], constants: &Constants) {
    for planet in table.iter_mut() {
        reconcile_radius(planet, constants);
        reconcile_mass(planet, constants);
        fill_equilibrium_temp(planet, constants);
    }
}

/// Earth-unit radius from the Jupiter-unit value, when only the latter is
/// reported.
fn reconcile_radius(planet: &mut PlanetRecord, constants: &Constants) {
    if planet.radius.is_none() {
        planet.radius = planet
            .radius_jup
            .map(|radius| radius * constants.jupiter_to_earth_radius);
    }
}

/// Earth-unit mass from the Jupiter-unit value, then from the mass-radius
/// relation when no mass is reported in any unit.
fn reconcile_mass(planet: &mut PlanetRecord, constants: &Constants) {
    if planet.mass.is_none() {
        planet.mass = planet
            .mass_jup
            .map(|mass| mass * constants.jupiter_to_earth_mass);
    }
    if planet.mass.is_none() {
        planet.mass = planet.radius.and_then(mass_from_radius);
    }
}

/// Chen & Kipping (2017) piecewise mass-radius relation, Earth units.
/// Terran and Neptunian regimes only; larger radii yield no estimate.
fn mass_from_radius(radius: EarthRadii) -> Option<EarthMasses> {
    if radius < 1.23 {
        Some(0.9718 * radius.powf(3.58))
    } else if radius < 14.26 {
        Some(1.436 * radius.powf(1.70))
    } else {
        None
    }
}

/// Apply the cascade to a record whose equilibrium temperature is still null.
fn fill_equilibrium_temp(planet: &mut PlanetRecord, constants: &Constants) {
    if planet.teq.is_some() {
        return;
    }
    planet.teq = TEQ_CASCADE.iter().find_map(|rule| rule(planet, constants));
}

fn teq_from_insolation(planet: &PlanetRecord, constants: &Constants) -> Option<Kelvin> {
    planet
        .insolation
        .map(|flux| constants.teq_insolation_coeff * flux.powf(0.25))
        .filter(|teq| teq.is_finite())
}

fn teq_reported(planet: &PlanetRecord, _constants: &Constants) -> Option<Kelvin> {
    planet.eq_temp
}

fn teq_from_star_ratio(planet: &PlanetRecord, _constants: &Constants) -> Option<Kelvin> {
    let teq = planet.star_eff_temp? / (2.0 * planet.ratio_a_rstar?).sqrt();
    Some(teq).filter(|teq| teq.is_finite())
}

fn teq_from_semi_major_axis(planet: &PlanetRecord, constants: &Constants) -> Option<Kelvin> {
    let a_over_rstar =
        constants.au_to_solar_radii * planet.semi_major_axis? / planet.star_radius?;
    let teq = planet.star_eff_temp? / (2.0 * a_over_rstar).sqrt();
    Some(teq).filter(|teq| teq.is_finite())
}
