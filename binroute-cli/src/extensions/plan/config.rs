//! Planning configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/plan/config_test.rs"]
mod config_test;

use binroute_core::clustering::{DensityConfig, EscalationConfig, SelectorConfig};
use binroute_core::metrics::ResourceConfig;
use binroute_core::planning::PlanningConfig;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A planning configuration. Every omitted value falls back to its default.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies clustering configuration.
    pub clustering: Option<ClusteringConfig>,
    /// Specifies vehicle resource configuration.
    pub resources: Option<ResourcesConfig>,
    /// Specifies route building configuration.
    pub routing: Option<RoutingConfig>,
}

/// A clustering configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringConfig {
    /// A minimum silhouette score to accept a partition. Default is 0.5.
    pub acceptance_threshold: Option<f64>,
    /// Minimum candidate cluster count. Default is 2.
    pub k_min: Option<usize>,
    /// Maximum candidate cluster count. Default is 10.
    pub k_max: Option<usize>,
    /// A random seed. Default is 42.
    pub seed: Option<u64>,
    /// Amount of multi-start runs per candidate. Default is 20.
    pub n_init: Option<usize>,
    /// Max iterations per run. Default is 300.
    pub max_iterations: Option<usize>,
    /// Density based fallback configuration.
    pub density: Option<DensityFallbackConfig>,
}

/// A density based fallback configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DensityFallbackConfig {
    /// A neighborhood radius in the scaled feature space. Default is 0.03.
    pub eps: Option<f64>,
    /// Minimum amount of points to form a dense region. Default is 5.
    pub min_samples: Option<usize>,
}

/// A vehicle resource configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesConfig {
    /// Fuel efficiency in kilometers per liter. Default is 4.
    pub fuel_efficiency: Option<f64>,
    /// Fuel price per liter. Default is 90.
    pub fuel_price: Option<f64>,
    /// Emitted CO2 in kilograms per kilometer. Default is 2.68.
    pub co2_per_km: Option<f64>,
}

/// A route building configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RoutingConfig {
    /// Max amount of points in a routed cluster. Default is 5000.
    pub max_cluster_size: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a planning config from config file.
pub fn create_planning_config_from_file<R: Read>(reader: BufReader<R>) -> Result<PlanningConfig, String> {
    read_config(reader).map(|config| create_planning_config(&config))
}

/// Creates a planning config from config.
pub fn create_planning_config(config: &Config) -> PlanningConfig {
    let defaults = PlanningConfig::default();

    PlanningConfig {
        escalation: configure_from_clustering(defaults.escalation, &config.clustering),
        resources: configure_from_resources(defaults.resources, &config.resources),
        max_cluster_size: config
            .routing
            .as_ref()
            .and_then(|routing| routing.max_cluster_size)
            .unwrap_or(defaults.max_cluster_size),
    }
}

fn configure_from_clustering(defaults: EscalationConfig, config: &Option<ClusteringConfig>) -> EscalationConfig {
    let Some(config) = config else { return defaults };

    let selector = SelectorConfig {
        k_min: config.k_min.unwrap_or(defaults.selector.k_min),
        k_max: config.k_max.unwrap_or(defaults.selector.k_max),
        seed: config.seed.unwrap_or(defaults.selector.seed),
        n_init: config.n_init.unwrap_or(defaults.selector.n_init),
        max_iterations: config.max_iterations.unwrap_or(defaults.selector.max_iterations),
    };

    let density = match &config.density {
        Some(density) => DensityConfig {
            eps: density.eps.unwrap_or(defaults.density.eps),
            min_samples: density.min_samples.unwrap_or(defaults.density.min_samples),
        },
        None => defaults.density,
    };

    EscalationConfig {
        acceptance_threshold: config.acceptance_threshold.unwrap_or(defaults.acceptance_threshold),
        selector,
        density,
    }
}

fn configure_from_resources(defaults: ResourceConfig, config: &Option<ResourcesConfig>) -> ResourceConfig {
    match config {
        Some(config) => ResourceConfig {
            fuel_efficiency: config.fuel_efficiency.unwrap_or(defaults.fuel_efficiency),
            fuel_price: config.fuel_price.unwrap_or(defaults.fuel_price),
            co2_per_km: config.co2_per_km.unwrap_or(defaults.co2_per_km),
        },
        None => defaults,
    }
}
