use super::*;

#[test]
fn can_create_generic_error_from_io_error() {
    let err: GenericError = std::io::Error::other("disk is full").into();

    assert_eq!(err.to_string(), "disk is full");
}

#[test]
fn can_convert_planning_error_into_generic() {
    let err: GenericError = PlanningError::EmptyCluster { cluster: ClusterLabel::Cluster(3) }.into();

    assert_eq!(err.to_string(), "cluster 3 has no points");
}

parameterized_test! {can_detect_recoverable_errors, (err, expected), {
    assert_eq!(err.is_recoverable(), expected);
}}

can_detect_recoverable_errors! {
    case01_invalid_input: (PlanningError::invalid_input("import", "missing column"), false),
    case02_no_valid_partition: (PlanningError::NoValidPartition { k_min: 2, k_max: 10 }, true),
    case03_empty_cluster: (PlanningError::EmptyCluster { cluster: ClusterLabel::Noise }, true),
    case04_degenerate: (
        PlanningError::DegenerateLabeling {
            strategy: "density-based".to_string(),
            reason: "all points are noise".to_string(),
        },
        true
    ),
}

#[test]
fn can_format_invalid_input_with_stage() {
    let err = PlanningError::invalid_input("feature preparation", "point table is empty");

    assert_eq!(err.to_string(), "invalid input at 'feature preparation' stage: point table is empty");
}

#[test]
fn can_format_quota_reached_with_stage() {
    let err = PlanningError::QuotaReached { stage: "cluster count selection", interrupted: 3 };

    assert!(err.is_recoverable());
    assert_eq!(
        err.to_string(),
        "time quota reached at 'cluster count selection' stage, 3 candidate(s) left unevaluated"
    );
}
