#[cfg(test)]
#[path = "../../tests/unit/clustering/labeling_test.rs"]
mod labeling_test;

use crate::models::{ClusterLabel, LabeledPoint, Point};
use rustc_hash::FxHashMap;
use std::fmt;

/// Describes why a labeling carries no separation signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degeneracy {
    /// All points share one label.
    SingleLabel,
    /// No point belongs to any cluster.
    AllNoise,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleLabel => write!(f, "single effective label"),
            Self::AllNoise => write!(f, "all points are noise"),
        }
    }
}

/// Cluster labels aligned with the input points.
#[derive(Clone, Debug, PartialEq)]
pub struct Labeling {
    labels: Vec<ClusterLabel>,
}

impl Labeling {
    /// Creates a new labeling.
    pub fn new(labels: Vec<ClusterLabel>) -> Self {
        Self { labels }
    }

    /// Creates a labeling from dense cluster ids.
    pub fn from_clusters(clusters: Vec<usize>) -> Self {
        Self { labels: clusters.into_iter().map(ClusterLabel::Cluster).collect() }
    }

    /// Creates a labeling which puts all points into the cluster `0`.
    pub fn single(size: usize) -> Self {
        Self { labels: vec![ClusterLabel::Cluster(0); size] }
    }

    /// Returns labels.
    pub fn labels(&self) -> &[ClusterLabel] {
        self.labels.as_slice()
    }

    /// Returns amount of labeled points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns amount of distinct non-noise clusters.
    pub fn cluster_count(&self) -> usize {
        let mut clusters = self.labels.iter().filter_map(|label| label.cluster_id()).collect::<Vec<_>>();
        clusters.sort_unstable();
        clusters.dedup();

        clusters.len()
    }

    /// Returns amount of noise points.
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_noise()).count()
    }

    /// Returns group ids suitable for quality scoring: noise forms its own group.
    pub fn groups(&self) -> Vec<usize> {
        let mut mapping = FxHashMap::default();

        self.labels
            .iter()
            .map(|label| {
                let next = mapping.len();
                *mapping.entry(*label).or_insert(next)
            })
            .collect()
    }

    /// Checks whether the labeling is degenerate.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match (self.cluster_count(), self.noise_count()) {
            (0, _) => Some(Degeneracy::AllNoise),
            (1, 0) => Some(Degeneracy::SingleLabel),
            _ => None,
        }
    }

    /// Attaches labels to points.
    pub fn apply(&self, points: &[Point]) -> Vec<LabeledPoint> {
        assert_eq!(points.len(), self.labels.len(), "each point should have a label");

        points
            .iter()
            .zip(self.labels.iter())
            .map(|(point, &cluster)| LabeledPoint { point: point.clone(), cluster })
            .collect()
    }
}
