//! This module contains an implementation of Density-Based Spatial Clustering of Applications with
//! Noise (DBSCAN).

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/dbscan_test.rs"]
mod dbscan_test;

/// Creates density based labels for `size` points indexed from zero.
/// `min_points`: The minimum number of points (including the point itself) in a neighborhood of
/// a core point.
/// `neighborhood_fn`: A function which returns neighbors of given point. It should return point
/// itself.
///
/// Returns a label per point: `Some(cluster)` where clusters are numbered in discovery order, or
/// `None` for noise.
pub fn create_density_labels<FN, IR>(size: usize, min_points: usize, neighborhood_fn: FN) -> Vec<Option<usize>>
where
    FN: Fn(usize) -> IR,
    IR: Iterator<Item = usize>,
{
    let mut point_types = vec![None; size];
    let mut labels = vec![None; size];
    let mut cluster = 0;

    for point in 0..size {
        if point_types[point].is_some() {
            continue;
        }

        let mut neighbors = neighborhood_fn(point).collect::<Vec<_>>();

        if neighbors.len() < min_points {
            point_types[point] = Some(PointType::Noise);
            continue;
        }

        let mut is_queued = vec![false; size];
        neighbors.iter().for_each(|&neighbor| is_queued[neighbor] = true);

        point_types[point] = Some(PointType::Clustered);
        labels[point] = Some(cluster);

        let mut index = 0;
        while index < neighbors.len() {
            let neighbor = neighbors[index];
            let point_type = point_types[neighbor];

            if point_type.is_none() {
                let other_neighbors = neighborhood_fn(neighbor).collect::<Vec<_>>();
                if other_neighbors.len() >= min_points {
                    other_neighbors.into_iter().for_each(|other| {
                        if !is_queued[other] {
                            is_queued[other] = true;
                            neighbors.push(other);
                        }
                    });
                }
            }

            // noise points reachable from a core point become border points
            if point_type != Some(PointType::Clustered) {
                point_types[neighbor] = Some(PointType::Clustered);
                labels[neighbor] = Some(cluster);
            }

            index += 1;
        }

        cluster += 1;
    }

    labels
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum PointType {
    Noise,
    Clustered,
}
