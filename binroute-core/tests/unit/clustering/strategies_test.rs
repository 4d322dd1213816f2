use super::*;
use crate::clustering::prepare_features;
use crate::helpers::models::*;

fn create_two_groups_features() -> FeatureMatrix {
    prepare_features(&create_two_groups_points(), false).expect("should prepare features")
}

fn create_fixed_k(k: usize) -> FixedKPartitioning {
    FixedKPartitioning { k, seed: 42, n_init: 20, max_iterations: 300 }
}

fn assert_two_groups(labeling: &Labeling) {
    let labels = labeling.labels();

    assert_eq!(labeling.cluster_count(), 2);
    assert!(labels[..3].iter().all(|label| *label == labels[0]));
    assert!(labels[3..].iter().all(|label| *label == labels[3]));
    assert_ne!(labels[0], labels[3]);
}

#[test]
fn can_partition_with_fixed_k() {
    let labeling = create_fixed_k(2).cluster(&create_two_groups_features()).expect("should cluster");

    assert_two_groups(&labeling);
}

#[test]
fn can_partition_with_hierarchical() {
    let labeling = HierarchicalFixedK { k: 2 }.cluster(&create_two_groups_features()).expect("should cluster");

    assert_two_groups(&labeling);
    assert_eq!(labeling.labels()[0], ClusterLabel::Cluster(0));
}

parameterized_test! {can_reject_invalid_k, k, {
    let result = create_fixed_k(k).cluster(&create_two_groups_features());

    assert!(matches!(result, Err(PlanningError::InvalidInput { .. })));
}}

can_reject_invalid_k! {
    case01_one: 1,
    case02_more_than_points: 7,
}

#[test]
fn can_cluster_with_density_and_mark_noise() {
    let features = create_feature_matrix(vec![
        vec![0., 0.],
        vec![0., 0.1],
        vec![0.1, 0.],
        vec![5., 5.],
        vec![10., 10.],
        vec![10., 10.1],
        vec![10.1, 10.],
    ]);

    let labeling = DensityBased { eps: 0.2, min_samples: 3 }.cluster(&features).expect("should cluster");

    assert_eq!(labeling.cluster_count(), 2);
    assert_eq!(labeling.labels()[3], ClusterLabel::Noise);
    assert_eq!(labeling.labels()[0], ClusterLabel::Cluster(0));
    assert_eq!(labeling.labels()[6], ClusterLabel::Cluster(1));
}

#[test]
fn can_fail_on_degenerate_density_labeling() {
    let features = create_feature_matrix(vec![vec![0., 0.], vec![5., 5.], vec![10., 10.]]);

    let result = DensityBased { eps: 0.03, min_samples: 5 }.cluster_non_degenerate(&features);

    assert!(matches!(result, Err(PlanningError::DegenerateLabeling { .. })));
}

#[test]
fn can_reject_invalid_density_parameters() {
    let features = create_feature_matrix(vec![vec![0., 0.]]);

    assert!(DensityBased { eps: 0., min_samples: 5 }.cluster(&features).is_err());
    assert!(DensityBased { eps: 0.1, min_samples: 0 }.cluster(&features).is_err());
}
