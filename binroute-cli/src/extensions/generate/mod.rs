//! Generates a random point table around a city center.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/simulation_test.rs"]
mod simulation_test;

use binroute_core::models::Point;
use binroute_core::utils::{Float, GenericResult, create_seeded_rng};
use rand::Rng;

/// Approximate amount of kilometers in one degree of latitude.
const KM_PER_DEGREE: Float = 111.;

/// Specifies point table simulation settings.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Amount of points to generate.
    pub points: usize,
    /// Latitude of the area center.
    pub center_lat: Float,
    /// Longitude of the area center.
    pub center_lng: Float,
    /// Max offset from the center in kilometers along each axis.
    pub spread_km: Float,
    /// Min and max waste amount in kilograms, both inclusive.
    pub waste_range: (u32, u32),
    /// A random seed.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { points: 300, center_lat: 28.7041, center_lng: 77.1025, spread_km: 5., waste_range: (3, 30), seed: 42 }
    }
}

/// Generates points uniformly distributed in a square around the center with integer waste
/// amounts. Ids start from one.
pub fn simulate_points(config: &SimulationConfig) -> GenericResult<Vec<Point>> {
    validate_config(config)?;

    let mut rng = create_seeded_rng(config.seed, 0);
    let spread = config.spread_km / KM_PER_DEGREE;
    let (waste_min, waste_max) = config.waste_range;

    let points = (0..config.points)
        .map(|idx| {
            let latitude = config.center_lat + rng.gen_range(-spread..=spread);
            let longitude = config.center_lng + rng.gen_range(-spread..=spread);
            let waste_kg = rng.gen_range(waste_min..=waste_max) as Float;

            Point::new(idx as i64 + 1, latitude.clamp(-90., 90.), longitude.clamp(-180., 180.), waste_kg)
        })
        .collect();

    Ok(points)
}

fn validate_config(config: &SimulationConfig) -> GenericResult<()> {
    if config.points == 0 {
        return Err("amount of points should be positive".into());
    }

    if !config.center_lat.is_finite() || config.center_lat.abs() > 90. {
        return Err(format!("invalid center latitude: {}", config.center_lat).into());
    }

    if !config.center_lng.is_finite() || config.center_lng.abs() > 180. {
        return Err(format!("invalid center longitude: {}", config.center_lng).into());
    }

    if !config.spread_km.is_finite() || config.spread_km < 0. {
        return Err(format!("spread should be a non-negative distance, got: {}", config.spread_km).into());
    }

    if config.waste_range.0 > config.waste_range.1 {
        return Err(format!("invalid waste range: {:?}", config.waste_range).into());
    }

    Ok(())
}
