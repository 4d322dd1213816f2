//! This module runs the whole planning pipeline: clustering with escalation, per-cluster routing
//! and resource metrics aggregation.

#[cfg(test)]
#[path = "../../tests/unit/planning/planning_test.rs"]
mod planning_test;

use crate::clustering::{EscalationConfig, EscalationResult, run_escalation};
use crate::metrics::{ClusterRouteResult, ResourceConfig, SystemSummary};
use crate::models::{ClusterLabel, LabeledPoint, Point};
use crate::routing::build_cluster_route;
use crate::utils::{Environment, PlanningError, Timer, parallel_into_collect};
use rustc_hash::FxHashMap;

/// Specifies planning settings.
#[derive(Clone, Debug)]
pub struct PlanningConfig {
    /// Clustering escalation settings.
    pub escalation: EscalationConfig,
    /// Resource metrics settings.
    pub resources: ResourceConfig,
    /// Max amount of points in a cluster which can be routed.
    pub max_cluster_size: usize,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self { escalation: EscalationConfig::default(), resources: ResourceConfig::default(), max_cluster_size: 5000 }
    }
}

/// Routes of all clusters with their aggregated metrics.
#[derive(Clone, Debug)]
pub struct RoutingResult {
    /// Route results ordered by cluster id.
    pub routes: Vec<ClusterRouteResult>,
    /// System wide totals.
    pub summary: SystemSummary,
}

/// A result of a planning run.
#[derive(Clone, Debug)]
pub struct PlanningReport {
    /// Points with their final cluster assignment.
    pub labeled_points: Vec<LabeledPoint>,
    /// Clustering escalation details.
    pub escalation: EscalationResult,
    /// Route results ordered by cluster id.
    pub routes: Vec<ClusterRouteResult>,
    /// System wide totals.
    pub summary: SystemSummary,
    /// Run duration in milliseconds.
    pub duration_ms: u128,
}

/// Clusters the points and builds a route per cluster.
pub fn plan_routes(
    points: &[Point],
    config: &PlanningConfig,
    environment: &Environment,
) -> Result<PlanningReport, PlanningError> {
    let timer = Timer::start();

    config.resources.validate()?;
    environment.log(&format!("planning routes for {} point(s)", points.len()));

    let escalation = run_escalation(points, &config.escalation, environment)?;
    let labeled_points = escalation.labeling.apply(points);

    let RoutingResult { routes, summary } = route_clusters(&labeled_points, config, environment)?;

    let duration_ms = timer.elapsed_millis();
    environment.log(&format!(
        "total: {} cluster(s), {} noise point(s), {:.2} km, fuel {:.2} l, cost {:.0}, CO2 {:.1} kg, \
         {} skipped point(s), took {} ms",
        summary.clusters,
        summary.noise_points,
        summary.total_distance_km,
        summary.total_fuel_liters,
        summary.total_cost_currency,
        summary.total_co2_kg,
        summary.skipped_points,
        duration_ms
    ));

    Ok(PlanningReport { labeled_points, escalation, routes, summary, duration_ms })
}

/// Builds a route per cluster of already labeled points. Noise points are routed as a separate
/// group. Clusters which cannot be routed get a zero metric result and their points are counted as
/// skipped. Clusters are routed in parallel, results are ordered by cluster id with noise last.
pub fn route_clusters(
    labeled_points: &[LabeledPoint],
    config: &PlanningConfig,
    environment: &Environment,
) -> Result<RoutingResult, PlanningError> {
    config.resources.validate()?;

    let clusters = group_by_cluster(labeled_points);

    let results = parallel_into_collect(clusters, |(cluster, points)| {
        if points.len() > config.max_cluster_size {
            let details = format!("{} points exceed the limit of {}", points.len(), config.max_cluster_size);
            return Err((cluster, points.len(), PlanningError::invalid_input("route building", details)));
        }

        build_cluster_route(cluster, &points)
            .map(|(tour, distance)| ClusterRouteResult::new(cluster, points.len(), tour, distance, &config.resources))
            .map_err(|err| (cluster, points.len(), err))
    });

    let (routes, skipped_points, skipped_clusters) = results.into_iter().fold(
        (Vec::new(), 0, 0),
        |(mut routes, skipped_points, skipped_clusters), result| match result {
            Ok(route) => {
                routes.push(route);
                (routes, skipped_points, skipped_clusters)
            }
            Err((cluster, size, err)) => {
                environment.log(&format!("cluster {cluster} is skipped: {err}"));
                routes.push(ClusterRouteResult::empty(cluster));
                (routes, skipped_points + size, skipped_clusters + 1)
            }
        },
    );

    routes.iter().filter(|route| route.points > 0).for_each(|route| {
        environment.log(&format!(
            "cluster {}: {} point(s), {:.2} km, fuel {:.2} l, cost {:.0}, CO2 {:.1} kg",
            route.cluster, route.points, route.distance_km, route.fuel_liters, route.cost_currency, route.co2_kg
        ))
    });

    let summary = SystemSummary::from_results(&routes, skipped_points, skipped_clusters);

    Ok(RoutingResult { routes, summary })
}

/// Groups points by cluster label keeping their input order inside each group. Groups are sorted
/// by cluster id, the noise group goes last.
fn group_by_cluster(labeled_points: &[LabeledPoint]) -> Vec<(ClusterLabel, Vec<&Point>)> {
    let mut clusters = labeled_points
        .iter()
        .fold(FxHashMap::<ClusterLabel, Vec<&Point>>::default(), |mut acc, labeled| {
            acc.entry(labeled.cluster).or_default().push(&labeled.point);
            acc
        })
        .into_iter()
        .collect::<Vec<_>>();

    clusters.sort_by_key(|(cluster, _)| *cluster);

    clusters
}
