#[cfg(test)]
#[path = "../../tests/unit/clustering/selector_test.rs"]
mod selector_test;

use crate::clustering::{
    ClusterQuality, ClusteringStrategy, FeatureMatrix, FeatureSet, FixedKPartitioning, Labeling, evaluate_quality,
};
use crate::utils::{Environment, PlanningError, compare_floats, parallel_collect};
use std::cmp::Ordering;
use std::fmt;

/// Specifies cluster count selection settings.
#[derive(Clone, Debug)]
pub struct SelectorConfig {
    /// Minimum candidate cluster count (inclusive), at least 2.
    pub k_min: usize,
    /// Maximum candidate cluster count (inclusive).
    pub k_max: usize,
    /// A random seed used by every candidate run.
    pub seed: u64,
    /// Amount of multi-start initializations per candidate.
    pub n_init: usize,
    /// Max iterations per initialization.
    pub max_iterations: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { k_min: 2, k_max: 10, seed: 42, n_init: 20, max_iterations: 300 }
    }
}

/// Quality scores of one evaluated candidate cluster count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusteringCandidate {
    /// Candidate cluster count.
    pub k: usize,
    /// Quality of the resulting partition.
    pub quality: ClusterQuality,
}

/// An ordered by `k` list of evaluated candidates for operator inspection.
#[derive(Clone, Debug)]
pub struct QualityReport {
    /// Features used for clustering.
    pub feature_set: FeatureSet,
    /// Non-degenerate candidates.
    pub candidates: Vec<ClusteringCandidate>,
    /// Amount of candidates skipped as degenerate.
    pub skipped: usize,
    /// Amount of candidates left unevaluated because the quota was reached.
    pub interrupted: usize,
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " k | silhouette | davies-bouldin | calinski-harabasz")?;
        writeln!(f, "---|------------|----------------|------------------")?;
        self.candidates.iter().try_for_each(|candidate| {
            let quality = &candidate.quality;
            writeln!(
                f,
                "{:>2} | {:>10.3} | {:>14.3} | {:>17.1}",
                candidate.k, quality.silhouette, quality.davies_bouldin, quality.calinski_harabasz
            )
        })
    }
}

/// A chosen cluster count with its quality, feature set and labeling.
#[derive(Clone, Debug)]
pub struct ClusterQualitySelection {
    /// Selected cluster count.
    pub k: usize,
    /// Quality of the selected partition.
    pub quality: ClusterQuality,
    /// Features used to obtain the partition.
    pub feature_set: FeatureSet,
    /// The selected partition.
    pub labeling: Labeling,
}

/// A result of cluster count scan.
#[derive(Clone, Debug)]
pub struct ClusterCountScan {
    /// The best candidate.
    pub selection: ClusterQualitySelection,
    /// All evaluated candidates.
    pub report: QualityReport,
}

/// Scans candidate cluster counts in `[k_min, k_max]` range, scores a centroid based partition for
/// each of them and selects the best one. Candidates which collapse to a single label are skipped.
/// Fails with `QuotaReached` if the quota stopped the scan before any candidate was scored, or with
/// `NoValidPartition` if every candidate is degenerate.
pub fn select_cluster_count(
    features: &FeatureMatrix,
    config: &SelectorConfig,
    environment: &Environment,
) -> Result<ClusterCountScan, PlanningError> {
    if config.k_min < 2 || config.k_min > config.k_max {
        return Err(PlanningError::invalid_input(
            "cluster count selection",
            format!("invalid cluster count range [{}, {}]", config.k_min, config.k_max),
        ));
    }

    let ks = (config.k_min..=config.k_max).collect::<Vec<_>>();

    let evaluated = parallel_collect(&ks, |&k| {
        if environment.is_quota_reached() { Evaluation::Interrupted } else { evaluate_candidate(features, k, config) }
    });

    let skipped = evaluated.iter().filter(|evaluation| matches!(evaluation, Evaluation::Degenerate)).count();
    let interrupted = evaluated.iter().filter(|evaluation| matches!(evaluation, Evaluation::Interrupted)).count();
    let (candidates, labelings): (Vec<_>, Vec<_>) = evaluated
        .into_iter()
        .filter_map(|evaluation| match evaluation {
            Evaluation::Scored(candidate, labeling) => Some((candidate, labeling)),
            _ => None,
        })
        .unzip();

    let mut ranked = candidates.clone();
    rank_candidates(&mut ranked);

    let no_valid_partition = || {
        if interrupted > 0 {
            PlanningError::QuotaReached { stage: "cluster count selection", interrupted }
        } else {
            PlanningError::NoValidPartition { k_min: config.k_min, k_max: config.k_max }
        }
    };

    let best = ranked.first().copied().ok_or_else(no_valid_partition)?;
    let labeling = candidates
        .iter()
        .zip(labelings)
        .find(|(candidate, _)| candidate.k == best.k)
        .map(|(_, labeling)| labeling)
        .ok_or_else(no_valid_partition)?;

    let report = QualityReport { feature_set: features.feature_set, candidates, skipped, interrupted };

    environment.log(&format!(
        "cluster count scan over '{}' features, {} candidate(s) skipped, {} interrupted:\n{}",
        features.feature_set, report.skipped, report.interrupted, report
    ));
    environment.log(&format!(
        "best k={} (silhouette={:.3}, davies-bouldin={:.3}, calinski-harabasz={:.1})",
        best.k, best.quality.silhouette, best.quality.davies_bouldin, best.quality.calinski_harabasz
    ));

    Ok(ClusterCountScan {
        selection: ClusterQualitySelection {
            k: best.k,
            quality: best.quality,
            feature_set: features.feature_set,
            labeling,
        },
        report,
    })
}

/// Sorts candidates from the best to the worst: by silhouette descending, then by
/// Calinski-Harabasz descending, then by Davies-Bouldin ascending. The sort is stable, so fully
/// equal candidates keep their original order.
pub fn rank_candidates(candidates: &mut [ClusteringCandidate]) {
    candidates.sort_by(|a, b| compare_candidates(b, a));
}

/// Returns `Greater` if `a` is better than `b`.
fn compare_candidates(a: &ClusteringCandidate, b: &ClusteringCandidate) -> Ordering {
    let (a, b) = (&a.quality, &b.quality);

    compare_floats(a.silhouette, b.silhouette)
        .then_with(|| compare_floats(a.calinski_harabasz, b.calinski_harabasz))
        .then_with(|| compare_floats(b.davies_bouldin, a.davies_bouldin))
}

enum Evaluation {
    Scored(ClusteringCandidate, Labeling),
    Degenerate,
    Interrupted,
}

fn evaluate_candidate(features: &FeatureMatrix, k: usize, config: &SelectorConfig) -> Evaluation {
    if k > features.len() {
        return Evaluation::Degenerate;
    }

    let strategy =
        FixedKPartitioning { k, seed: config.seed, n_init: config.n_init, max_iterations: config.max_iterations };

    strategy
        .cluster(features)
        .ok()
        .filter(|labeling| labeling.cluster_count() >= 2)
        .and_then(|labeling| evaluate_quality(features, &labeling).map(|quality| (quality, labeling)))
        .map_or(Evaluation::Degenerate, |(quality, labeling)| {
            Evaluation::Scored(ClusteringCandidate { k, quality }, labeling)
        })
}
