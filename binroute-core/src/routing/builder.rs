#[cfg(test)]
#[path = "../../tests/unit/routing/builder_test.rs"]
mod builder_test;

use crate::models::{ClusterLabel, Point};
use crate::routing::{DistanceMatrix, Tour, create_nearest_neighbor_order};
use crate::utils::{Float, PlanningError};

/// Builds a closed tour over cluster points (in their input order) and returns it together with
/// its total geodesic distance in kilometers.
pub fn build_cluster_route(cluster: ClusterLabel, points: &[&Point]) -> Result<(Tour, Float), PlanningError> {
    match points {
        [] => Err(PlanningError::EmptyCluster { cluster }),
        [point] => Ok((Tour::from_visits([point.id]), 0.)),
        _ => {
            let matrix = DistanceMatrix::from_points(points);
            let (order, distance) = create_nearest_neighbor_order(&matrix);

            Ok((Tour::from_visits(order.into_iter().map(|idx| points[idx].id)), distance))
        }
    }
}
