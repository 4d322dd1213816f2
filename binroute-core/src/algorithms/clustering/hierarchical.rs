//! This module contains a bottom-up (agglomerative) hierarchical clustering with Ward linkage.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/hierarchical_test.rs"]
mod hierarchical_test;

use crate::algorithms::math::squared_euclidean_distance;
use crate::utils::Float;

struct WardCluster {
    centroid: Vec<Float>,
    members: Vec<usize>,
}

impl WardCluster {
    /// Returns increase of total within-cluster variance caused by merging two clusters.
    fn merge_cost(&self, other: &WardCluster) -> Float {
        let (size_a, size_b) = (self.members.len() as Float, other.members.len() as Float);

        size_a * size_b / (size_a + size_b) * squared_euclidean_distance(&self.centroid, &other.centroid)
    }

    fn merge(&mut self, other: WardCluster) {
        let (size_a, size_b) = (self.members.len() as Float, other.members.len() as Float);
        let total = size_a + size_b;

        self.centroid
            .iter_mut()
            .zip(other.centroid.iter())
            .for_each(|(a, b)| *a = (*a * size_a + b * size_b) / total);
        self.members.extend(other.members);
    }
}

/// Merges clusters bottom-up, always choosing the pair with the smallest Ward cost, until `k`
/// clusters remain. Ties are resolved in favor of the pair found first in data order.
///
/// Returns a label per point, clusters are numbered by their first member in data order.
/// Returns `None` when `k` is zero or exceeds amount of data points.
pub fn create_ward_labels(data: &[Vec<Float>], k: usize) -> Option<Vec<usize>> {
    if k == 0 || data.len() < k {
        return None;
    }

    let mut clusters = data
        .iter()
        .enumerate()
        .map(|(idx, p)| WardCluster { centroid: p.clone(), members: vec![idx] })
        .collect::<Vec<_>>();

    while clusters.len() > k {
        let mut best = (0, 1, Float::MAX);

        for i in 0..clusters.len() {
            for j in (i + 1)..clusters.len() {
                let cost = clusters[i].merge_cost(&clusters[j]);
                if cost < best.2 {
                    best = (i, j, cost);
                }
            }
        }

        let (i, j, _) = best;
        let other = clusters.remove(j);
        clusters[i].merge(other);
    }

    clusters.sort_by_key(|cluster| cluster.members.iter().min().copied().unwrap_or(usize::MAX));

    let mut labels = vec![0; data.len()];
    clusters.iter().enumerate().for_each(|(label, cluster)| {
        cluster.members.iter().for_each(|&member| labels[member] = label);
    });

    Some(labels)
}
