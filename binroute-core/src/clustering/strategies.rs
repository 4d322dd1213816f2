#[cfg(test)]
#[path = "../../tests/unit/clustering/strategies_test.rs"]
mod strategies_test;

use crate::algorithms::clustering::{KMeans, create_density_labels, create_ward_labels};
use crate::algorithms::math::squared_euclidean_distance;
use crate::clustering::{FeatureMatrix, Labeling};
use crate::models::ClusterLabel;
use crate::utils::{Float, PlanningError};

const STAGE: &str = "clustering";

/// A clustering strategy which partitions standardized feature vectors.
pub trait ClusteringStrategy: Send + Sync {
    /// Returns a short name of the strategy.
    fn name(&self) -> &'static str;

    /// Assigns a label to each feature row.
    fn cluster(&self, features: &FeatureMatrix) -> Result<Labeling, PlanningError>;

    /// Assigns a label to each feature row and fails when the result is degenerate.
    fn cluster_non_degenerate(&self, features: &FeatureMatrix) -> Result<Labeling, PlanningError> {
        let labeling = self.cluster(features)?;

        match labeling.degeneracy() {
            Some(degeneracy) => Err(PlanningError::DegenerateLabeling {
                strategy: self.name().to_string(),
                reason: degeneracy.to_string(),
            }),
            None => Ok(labeling),
        }
    }
}

/// A centroid based partitioning into fixed amount of clusters (K-Means).
#[derive(Clone, Debug)]
pub struct FixedKPartitioning {
    /// Amount of clusters.
    pub k: usize,
    /// Random seed.
    pub seed: u64,
    /// Amount of multi-start runs.
    pub n_init: usize,
    /// Max iterations per run.
    pub max_iterations: usize,
}

impl ClusteringStrategy for FixedKPartitioning {
    fn name(&self) -> &'static str {
        "fixed-k"
    }

    fn cluster(&self, features: &FeatureMatrix) -> Result<Labeling, PlanningError> {
        validate_k(self.k, features)?;

        KMeans::new(self.k, self.seed)
            .with_n_init(self.n_init)
            .with_max_iterations(self.max_iterations)
            .fit(&features.rows)
            .map(|result| Labeling::from_clusters(result.labels))
            .ok_or_else(|| PlanningError::invalid_input(STAGE, format!("cannot run k-means with k={}", self.k)))
    }
}

/// A density based clustering (DBSCAN): cluster count is emergent and sparse points are noise.
#[derive(Clone, Debug)]
pub struct DensityBased {
    /// A neighborhood radius in the scaled feature space.
    pub eps: Float,
    /// Minimum amount of points (including the point itself) within `eps` to form a dense core.
    pub min_samples: usize,
}

impl ClusteringStrategy for DensityBased {
    fn name(&self) -> &'static str {
        "density-based"
    }

    fn cluster(&self, features: &FeatureMatrix) -> Result<Labeling, PlanningError> {
        if !(self.eps > 0.) || self.min_samples == 0 {
            return Err(PlanningError::invalid_input(
                STAGE,
                format!("density parameters should be positive: eps={}, min_samples={}", self.eps, self.min_samples),
            ));
        }

        let rows = &features.rows;
        let eps_sq = self.eps * self.eps;

        let neighborhoods = rows
            .iter()
            .map(|row| {
                rows.iter()
                    .enumerate()
                    .filter(|(_, other)| squared_euclidean_distance(row, other) <= eps_sq)
                    .map(|(idx, _)| idx)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let labels = create_density_labels(rows.len(), self.min_samples, |idx| neighborhoods[idx].iter().copied());

        Ok(Labeling::new(
            labels.into_iter().map(|label| label.map_or(ClusterLabel::Noise, ClusterLabel::Cluster)).collect(),
        ))
    }
}

/// A bottom-up hierarchical clustering with Ward linkage into fixed amount of clusters.
#[derive(Clone, Debug)]
pub struct HierarchicalFixedK {
    /// Amount of clusters.
    pub k: usize,
}

impl ClusteringStrategy for HierarchicalFixedK {
    fn name(&self) -> &'static str {
        "hierarchical"
    }

    fn cluster(&self, features: &FeatureMatrix) -> Result<Labeling, PlanningError> {
        validate_k(self.k, features)?;

        create_ward_labels(&features.rows, self.k)
            .map(Labeling::from_clusters)
            .ok_or_else(|| PlanningError::invalid_input(STAGE, format!("cannot run hierarchical with k={}", self.k)))
    }
}

fn validate_k(k: usize, features: &FeatureMatrix) -> Result<(), PlanningError> {
    if k < 2 {
        return Err(PlanningError::invalid_input(STAGE, format!("cluster count should be at least 2, got {k}")));
    }

    if k > features.len() {
        return Err(PlanningError::invalid_input(
            STAGE,
            format!("cluster count {k} exceeds amount of points {}", features.len()),
        ));
    }

    Ok(())
}
