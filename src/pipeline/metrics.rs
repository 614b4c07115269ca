//! # Derived observability metrics
//!
//! Third and last pipeline stage. Computes, per planet and purely from the
//! filled fields, the quantities used to rank atmospheric follow-up targets:
//!
//! * the derived transit ratio Rp/Rs and its square (the transit depth),
//! * the piecewise TSM scale factor of Kempton et al. 2018
//!   (<https://arxiv.org/pdf/1805.03671.pdf>),
//! * the **Transmission Spectroscopy Metric** (TSM),
//! * the dayside Planck-ratio intermediate and the
//!   **Emission Spectroscopy Metric** (ESM),
//! * the planetary surface gravity.
//!
//! ## Null propagation
//! -----------------
//! A null input to any formula yields a null output for that metric and
//! nothing else: missing data never aborts a run. The helpers below encode
//! this with `Option` returns and `?` on every consumed field.
//!
//! ## No upstream mutation
//! -----------------
//! The stage writes only the derived fields. In particular the derived
//! transit ratio is stored next to, not over, the reported `Rp/Rs`.

use crate::catalog::record::PlanetRecord;
use crate::constants::{
    Constants, EarthRadii, Kelvin, Meter, EARTH_MASS_KG, EARTH_RADIUS_M, GRAVITATIONAL_CONSTANT,
};

/// Scale factor marking a planet with no usable radius. This is a sentinel,
/// not a physically meaningful scale: the TSM of such a planet is null anyway
/// through its radius factor.
pub const UNSCALED: f64 = 0.0;

/// Compute all derived fields over the filled table, in place.
pub fn compute_metrics(table: &mut [PlanetRecord], constants: &Constants) {
    for planet in table.iter_mut() {
        planet.transit_ratio = transit_ratio(planet, constants);
        planet.transit_depth = planet.transit_ratio.map(|ratio| ratio * ratio);
        planet.tsm_scale = tsm_scale_factor(planet.radius);
        planet.tsm = tsm(planet, constants);
        planet.esm_day = dayside_emission(planet, constants);
        planet.esm = esm(planet, constants);
        planet.gravity = surface_gravity(planet);
    }
}

/// Rp/Rs from the filled planet radius and the stellar radius.
fn transit_ratio(planet: &PlanetRecord, constants: &Constants) -> Option<f64> {
    Some(constants.earth_to_sun_radius * planet.radius? / planet.star_radius?)
}

/// Piecewise TSM scale factor by planet radius, first matching bucket wins.
///
/// | radius (Earth radii) | scale |
/// |---|---|
/// | R ≤ 1.5 | 0.19 |
/// | 1.5 < R ≤ 2.75 | 1.26 |
/// | 2.75 < R ≤ 4.0 | 1.28 |
/// | R > 4.0 | 1.15 |
///
/// A null (or non-comparable) radius falls out of every bucket and gets the
/// [`UNSCALED`] sentinel.
pub fn tsm_scale_factor(radius: Option<EarthRadii>) -> f64 {
    match radius {
        Some(radius) if radius <= 1.5 => 0.19,
        Some(radius) if radius <= 2.75 => 1.26,
        Some(radius) if radius <= 4.0 => 1.28,
        Some(radius) if radius > 4.0 => 1.15,
        _ => UNSCALED,
    }
}

/// Transmission Spectroscopy Metric.
fn tsm(planet: &PlanetRecord, constants: &Constants) -> Option<f64> {
    Some(
        planet.radius? * planet.transit_depth? / constants.earth_to_sun_radius.powi(2)
            * planet.teq?
            / planet.mass?
            * 10f64.powf(-0.2 * planet.jmag?)
            * planet.tsm_scale,
    )
}

/// Ratio of two Planck laws at one wavelength.
///
/// Arguments
/// ---------
/// * `t_star`: stellar effective temperature in Kelvin
/// * `t_planet`: planet dayside temperature in Kelvin
/// * `wavelength`: evaluation wavelength in meters
///
/// Return
/// ------
/// * (exp(h·c / (λ·kB·Tstar)) − 1) / (exp(h·c / (λ·kB·Tplanet)) − 1)
pub fn planck_ratio(
    t_star: Kelvin,
    t_planet: Kelvin,
    wavelength: Meter,
    constants: &Constants,
) -> f64 {
    let hc_over_lkb =
        constants.planck * constants.speed_of_light / (wavelength * constants.boltzmann);
    ((hc_over_lkb / t_star).exp() - 1.0) / ((hc_over_lkb / t_planet).exp() - 1.0)
}

/// Dayside emission intermediate of the ESM, in ppm: the transit depth scaled
/// by the star-to-dayside Planck ratio at the reference wavelength.
fn dayside_emission(planet: &PlanetRecord, constants: &Constants) -> Option<f64> {
    let ratio = planck_ratio(
        planet.star_eff_temp?,
        constants.dayside_temp_factor * planet.teq?,
        constants.esm_wavelength,
        constants,
    );
    Some(planet.transit_depth? * 1.0e6 * ratio)
}

/// Emission Spectroscopy Metric.
fn esm(planet: &PlanetRecord, constants: &Constants) -> Option<f64> {
    Some(constants.esm_reference_scale * planet.esm_day? * 10f64.powf(-0.2 * planet.kmag?))
}

/// Surface gravity in m/s² from the filled mass and radius.
fn surface_gravity(planet: &PlanetRecord) -> Option<f64> {
    let radius_m = planet.radius? * EARTH_RADIUS_M;
    let mass_kg = planet.mass? * EARTH_MASS_KG;
    Some(GRAVITATIONAL_CONSTANT * mass_kg / (radius_m * radius_m))
}

#[cfg(test)]
mod metrics_test {
    use super::*;

    fn computed(planet: PlanetRecord) -> PlanetRecord {
        let mut table = vec![planet];
        compute_metrics(&mut table, &Constants::default());
        table.pop().unwrap()
    }

    #[test]
    fn test_scale_bucket_boundaries() {
        assert_eq!(tsm_scale_factor(Some(1.5)), 0.19);
        assert_eq!(tsm_scale_factor(Some(1.5 + 1e-9)), 1.26);
        assert_eq!(tsm_scale_factor(Some(2.75)), 1.26);
        assert_eq!(tsm_scale_factor(Some(2.75 + 1e-9)), 1.28);
        assert_eq!(tsm_scale_factor(Some(4.0)), 1.28);
        assert_eq!(tsm_scale_factor(Some(4.0 + 1e-9)), 1.15);
        assert_eq!(tsm_scale_factor(None), UNSCALED);
    }

    #[test]
    fn test_planck_ratio_properties() {
        let constants = Constants::default();
        let wavelength = constants.esm_wavelength;

        // Identical temperatures cancel exactly.
        assert_eq!(planck_ratio(5772.0, 5772.0, wavelength, &constants), 1.0);

        // A hotter dayside emits more, so the ratio shrinks.
        let cold = planck_ratio(5772.0, 500.0, wavelength, &constants);
        let hot = planck_ratio(5772.0, 1500.0, wavelength, &constants);
        assert!(cold > hot);
        assert!(hot > 0.0);
    }

    #[test]
    fn test_transit_depth_from_filled_radius() {
        let planet = computed(PlanetRecord {
            radius: Some(2.0),
            star_radius: Some(0.5),
            ratio_r_rstar: Some(0.123),
            ..PlanetRecord::default()
        });

        let expected_ratio = Constants::default().earth_to_sun_radius * 2.0 / 0.5;
        assert!((planet.transit_ratio.unwrap() - expected_ratio).abs() < 1e-15);
        assert!((planet.transit_depth.unwrap() - expected_ratio * expected_ratio).abs() < 1e-15);

        // The reported ratio must survive untouched.
        assert_eq!(planet.ratio_r_rstar, Some(0.123));
    }

    #[test]
    fn test_null_inputs_propagate() {
        // No stellar radius: no depth, hence no TSM and no ESM.
        let planet = computed(PlanetRecord {
            radius: Some(1.0),
            mass: Some(1.0),
            teq: Some(300.0),
            jmag: Some(10.0),
            kmag: Some(9.0),
            star_eff_temp: Some(5772.0),
            ..PlanetRecord::default()
        });
        assert_eq!(planet.transit_ratio, None);
        assert_eq!(planet.transit_depth, None);
        assert_eq!(planet.tsm, None);
        assert_eq!(planet.esm_day, None);
        assert_eq!(planet.esm, None);

        // The scale bucket still resolves from the radius alone.
        assert_eq!(planet.tsm_scale, 0.19);
    }

    #[test]
    fn test_surface_gravity() {
        let planet = computed(PlanetRecord {
            radius: Some(1.0),
            mass: Some(1.0),
            ..PlanetRecord::default()
        });
        // One Earth mass and radius: g close to 9.8 m/s².
        let gravity = planet.gravity.unwrap();
        assert!((gravity - 9.8).abs() < 0.1);

        let unsized_planet = computed(PlanetRecord {
            mass: Some(1.0),
            ..PlanetRecord::default()
        });
        assert_eq!(unsized_planet.gravity, None);
    }
}
