#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze/clusters_test.rs"]
mod clusters_test;

use crate::extensions::import::read_points;
use binroute_core::clustering::*;
use binroute_core::utils::{Environment, GenericResult};
use std::fmt::Write;
use std::io::{BufReader, Read};

/// Scans candidate cluster counts over the point table.
pub fn get_cluster_count_scan<R: Read>(
    points_reader: BufReader<R>,
    include_weight: bool,
    config: &SelectorConfig,
    environment: &Environment,
) -> GenericResult<ClusterCountScan> {
    let points = read_points(points_reader)?;
    let features = prepare_features(&points, include_weight)?;

    Ok(select_cluster_count(&features, config, environment)?)
}

/// Scans candidate cluster counts and renders the quality report as text.
pub fn get_clusters_analysis<R: Read>(
    points_reader: BufReader<R>,
    include_weight: bool,
    config: &SelectorConfig,
    environment: &Environment,
) -> GenericResult<String> {
    let scan = get_cluster_count_scan(points_reader, include_weight, config, environment)?;
    let selection = &scan.selection;

    let mut result = String::new();
    writeln!(result, "features: {}", scan.report.feature_set).map_err(|err| format!("{err}"))?;
    writeln!(result, "skipped candidates: {}", scan.report.skipped).map_err(|err| format!("{err}"))?;
    if scan.report.interrupted > 0 {
        writeln!(result, "interrupted candidates: {}", scan.report.interrupted).map_err(|err| format!("{err}"))?;
    }
    write!(result, "{}", scan.report).map_err(|err| format!("{err}"))?;
    writeln!(
        result,
        "best: k={}, silhouette={:.3}, davies-bouldin={:.3}, calinski-harabasz={:.1}, clusters={}",
        selection.k,
        selection.quality.silhouette,
        selection.quality.davies_bouldin,
        selection.quality.calinski_harabasz,
        selection.labeling.cluster_count()
    )
    .map_err(|err| format!("{err}"))?;

    Ok(result)
}

/// Partitions the point table with hierarchical (Ward) clustering into `k` clusters and renders
/// its quality and cluster sizes as text.
pub fn get_hierarchical_analysis<R: Read>(
    points_reader: BufReader<R>,
    include_weight: bool,
    k: usize,
    environment: &Environment,
) -> GenericResult<String> {
    let points = read_points(points_reader)?;
    let features = prepare_features(&points, include_weight)?;

    let strategy = HierarchicalFixedK { k };
    let labeling = strategy.cluster_non_degenerate(&features)?;
    let quality = evaluate_quality(&features, &labeling)
        .ok_or_else(|| format!("cannot score {} partition with k={k}", strategy.name()))?;

    environment.log(&format!("{} clustering with k={k}: silhouette={:.3}", strategy.name(), quality.silhouette));

    let mut sizes = vec![0; labeling.cluster_count()];
    labeling.labels().iter().filter_map(|label| label.cluster_id()).for_each(|cluster| sizes[cluster] += 1);

    let mut result = String::new();
    writeln!(result, "features: {}", features.feature_set).map_err(|err| format!("{err}"))?;
    writeln!(
        result,
        "{}: k={k}, silhouette={:.3}, davies-bouldin={:.3}, calinski-harabasz={:.1}",
        strategy.name(),
        quality.silhouette,
        quality.davies_bouldin,
        quality.calinski_harabasz
    )
    .map_err(|err| format!("{err}"))?;
    sizes
        .iter()
        .enumerate()
        .try_for_each(|(cluster, size)| writeln!(result, "cluster {cluster}: {size} point(s)"))
        .map_err(|err| format!("{err}"))?;

    Ok(result)
}
