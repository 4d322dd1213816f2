use crate::algorithms::quality::{calinski_harabasz_score, davies_bouldin_score, silhouette_score};
use crate::clustering::{FeatureMatrix, Labeling};
use crate::utils::Float;

/// Internal quality scores of a partition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterQuality {
    /// Silhouette score in [-1, 1], higher is better.
    pub silhouette: Float,
    /// Davies-Bouldin index, lower is better.
    pub davies_bouldin: Float,
    /// Calinski-Harabasz index, higher is better.
    pub calinski_harabasz: Float,
}

/// Scores the labeling over given features. Noise points are scored as their own group.
/// Returns `None` when scores are undefined for the labeling.
pub fn evaluate_quality(features: &FeatureMatrix, labeling: &Labeling) -> Option<ClusterQuality> {
    let groups = labeling.groups();

    Some(ClusterQuality {
        silhouette: silhouette_score(&features.rows, &groups)?,
        davies_bouldin: davies_bouldin_score(&features.rows, &groups)?,
        calinski_harabasz: calinski_harabasz_score(&features.rows, &groups)?,
    })
}
