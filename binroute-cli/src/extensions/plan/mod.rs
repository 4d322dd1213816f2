//! Runs route planning over a point table.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/plan/plan_test.rs"]
mod plan_test;

mod config;
pub use self::config::*;

use crate::extensions::import::read_points;
use binroute_core::planning::{PlanningConfig, PlanningReport, plan_routes};
use binroute_core::utils::Environment;
use std::io::{BufReader, Read};

/// Reads point table and optional config and plans routes.
pub fn plan_from_readers<P: Read, C: Read>(
    points_reader: BufReader<P>,
    config_reader: Option<BufReader<C>>,
    environment: &Environment,
) -> Result<PlanningReport, String> {
    let config = match config_reader {
        Some(reader) => create_planning_config_from_file(reader)?,
        None => PlanningConfig::default(),
    };

    let points = read_points(points_reader).map_err(|err| format!("cannot read points: '{err}'"))?;

    plan_routes(&points, &config, environment).map_err(|err| format!("cannot plan routes: '{err}'"))
}
