//! This module converts tour distance into fuel, cost and emissions and aggregates them.

#[cfg(test)]
#[path = "../../tests/unit/metrics/metrics_test.rs"]
mod metrics_test;

use crate::models::ClusterLabel;
use crate::routing::Tour;
use crate::utils::{Float, PlanningError};

/// Vehicle and fuel parameters used to derive resource usage from distance.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceConfig {
    /// Fuel efficiency in kilometers per liter.
    pub fuel_efficiency: Float,
    /// Fuel price per liter.
    pub fuel_price: Float,
    /// Emitted CO2 in kilograms per kilometer.
    pub co2_per_km: Float,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self { fuel_efficiency: 4.0, fuel_price: 90.0, co2_per_km: 2.68 }
    }
}

impl ResourceConfig {
    /// Checks that the parameters can be used for calculations.
    pub fn validate(&self) -> Result<(), PlanningError> {
        let is_valid = self.fuel_efficiency.is_finite()
            && self.fuel_efficiency > 0.
            && self.fuel_price.is_finite()
            && self.fuel_price >= 0.
            && self.co2_per_km.is_finite()
            && self.co2_per_km >= 0.;

        if is_valid {
            Ok(())
        } else {
            Err(PlanningError::invalid_input("resource metrics", format!("invalid resource parameters: {self:?}")))
        }
    }
}

/// Resources needed to drive some distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResourceUsage {
    /// Consumed fuel in liters.
    pub fuel_liters: Float,
    /// Fuel cost.
    pub cost_currency: Float,
    /// Emitted CO2 in kilograms.
    pub co2_kg: Float,
}

/// Estimates resource usage for given distance in kilometers.
pub fn estimate_resources(distance_km: Float, config: &ResourceConfig) -> ResourceUsage {
    let fuel_liters = distance_km / config.fuel_efficiency;

    ResourceUsage {
        fuel_liters,
        cost_currency: fuel_liters * config.fuel_price,
        co2_kg: distance_km * config.co2_per_km,
    }
}

/// A route of a single cluster with its metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterRouteResult {
    /// A cluster label, noise points are routed as a group of their own.
    pub cluster: ClusterLabel,
    /// Amount of points in the cluster.
    pub points: usize,
    /// A closed visiting tour.
    pub tour: Tour,
    /// Tour distance in kilometers.
    pub distance_km: Float,
    /// Consumed fuel in liters.
    pub fuel_liters: Float,
    /// Fuel cost.
    pub cost_currency: Float,
    /// Emitted CO2 in kilograms.
    pub co2_kg: Float,
}

impl ClusterRouteResult {
    /// Creates a route result deriving resource usage from tour distance.
    pub fn new(cluster: ClusterLabel, points: usize, tour: Tour, distance_km: Float, config: &ResourceConfig) -> Self {
        let usage = estimate_resources(distance_km, config);

        Self {
            cluster,
            points,
            tour,
            distance_km,
            fuel_liters: usage.fuel_liters,
            cost_currency: usage.cost_currency,
            co2_kg: usage.co2_kg,
        }
    }

    /// Creates a zero metric result for a cluster which could not be routed.
    pub fn empty(cluster: ClusterLabel) -> Self {
        Self {
            cluster,
            points: 0,
            tour: Tour::empty(),
            distance_km: 0.,
            fuel_liters: 0.,
            cost_currency: 0.,
            co2_kg: 0.,
        }
    }
}

/// System wide totals over all cluster routes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemSummary {
    /// Amount of cluster results, zero metric ones included and the noise group excluded.
    pub clusters: usize,
    /// Amount of routed points, noise ones included.
    pub points: usize,
    /// Amount of noise points routed as a separate group.
    pub noise_points: usize,
    /// Points per group as (cluster label, amount) pairs.
    pub cluster_points: Vec<(ClusterLabel, usize)>,
    /// Total distance in kilometers.
    pub total_distance_km: Float,
    /// Total fuel in liters.
    pub total_fuel_liters: Float,
    /// Total fuel cost.
    pub total_cost_currency: Float,
    /// Total CO2 in kilograms.
    pub total_co2_kg: Float,
    /// Amount of points which were not routed because their cluster was skipped.
    pub skipped_points: usize,
    /// Amount of clusters which were not routed.
    pub skipped_clusters: usize,
}

impl SystemSummary {
    /// Aggregates route results with field-wise sums.
    pub fn from_results(results: &[ClusterRouteResult], skipped_points: usize, skipped_clusters: usize) -> Self {
        results.iter().fold(
            Self { skipped_points, skipped_clusters, ..Self::default() },
            |mut acc, result| {
                if result.cluster.is_noise() {
                    acc.noise_points += result.points;
                } else {
                    acc.clusters += 1;
                }
                acc.points += result.points;
                acc.cluster_points.push((result.cluster, result.points));
                acc.total_distance_km += result.distance_km;
                acc.total_fuel_liters += result.fuel_liters;
                acc.total_cost_currency += result.cost_currency;
                acc.total_co2_kg += result.co2_kg;

                acc
            },
        )
    }
}
