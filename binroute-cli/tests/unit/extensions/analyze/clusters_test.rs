use super::*;
use crate::helpers::TWO_GROUPS_CSV;

#[test]
fn can_render_clusters_analysis() {
    let analysis = get_clusters_analysis(
        BufReader::new(TWO_GROUPS_CSV.as_bytes()),
        true,
        &SelectorConfig::default(),
        &Environment::new_silent(),
    )
    .expect("should analyze");

    assert!(analysis.starts_with("features: latitude+longitude+waste_kg\n"));
    assert!(analysis.contains("skipped candidates: 5\n"));
    assert!(analysis.contains("best: k=2,"));
    assert!(analysis.contains("clusters=2"));
}

#[test]
fn can_scan_geography_only_features() {
    let scan = get_cluster_count_scan(
        BufReader::new(TWO_GROUPS_CSV.as_bytes()),
        false,
        &SelectorConfig { k_max: 4, ..SelectorConfig::default() },
        &Environment::new_silent(),
    )
    .expect("should analyze");

    assert_eq!(scan.report.feature_set.to_string(), "latitude+longitude");
    assert_eq!(scan.selection.k, 2);
    assert_eq!(scan.report.candidates.len(), 3);
}

#[test]
fn can_fail_when_no_partition_is_valid() {
    let result = get_cluster_count_scan(
        BufReader::new("id,latitude,longitude\n1,0,0\n2,1,1\n".as_bytes()),
        true,
        &SelectorConfig::default(),
        &Environment::new_silent(),
    );

    assert!(result.is_err_and(|err| err.to_string().contains("no valid partition")));
}

#[test]
fn can_render_hierarchical_analysis() {
    let analysis =
        get_hierarchical_analysis(BufReader::new(TWO_GROUPS_CSV.as_bytes()), false, 2, &Environment::new_silent())
            .expect("should analyze");

    assert!(analysis.starts_with("features: latitude+longitude\nhierarchical: k=2, silhouette="));
    assert!(analysis.contains("cluster 0: 3 point(s)\ncluster 1: 3 point(s)\n"));
}

#[test]
fn can_fail_hierarchical_analysis_with_invalid_k() {
    let result =
        get_hierarchical_analysis(BufReader::new(TWO_GROUPS_CSV.as_bytes()), true, 7, &Environment::new_silent());

    assert!(result.is_err_and(|err| err.to_string().contains("exceeds amount of points")));
}
