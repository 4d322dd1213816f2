use super::*;
use crate::helpers::models::*;

#[test]
fn can_prepare_features_with_weight() {
    let points = vec![Point::new(1, 0., 0., 1.), Point::new(2, 1., 2., 3.)];

    let features = prepare_features(&points, true).expect("should prepare features");

    assert_eq!(features.feature_set, FeatureSet::WithWeight);
    assert_eq!(features.rows, vec![vec![-1., -1., -1.], vec![1., 1., 1.]]);
}

#[test]
fn can_prepare_geography_only_features_when_requested() {
    let points = vec![Point::new(1, 0., 0., 1.), Point::new(2, 1., 2., 3.)];

    let features = prepare_features(&points, false).expect("should prepare features");

    assert_eq!(features.feature_set, FeatureSet::GeographyOnly);
    assert!(features.rows.iter().all(|row| row.len() == 2));
}

#[test]
fn can_drop_weight_when_some_point_has_no_weight() {
    let points = vec![Point::new(1, 0., 0., 1.), Point::new_unweighted(2, 1., 2.)];

    let features = prepare_features(&points, true).expect("should prepare features");

    assert_eq!(features.feature_set, FeatureSet::GeographyOnly);
}

#[test]
fn can_format_feature_set() {
    assert_eq!(FeatureSet::WithWeight.to_string(), "latitude+longitude+waste_kg");
    assert_eq!(FeatureSet::GeographyOnly.to_string(), "latitude+longitude");
}

parameterized_test! {can_reject_invalid_points, points, {
    let result = prepare_features(&points, true);

    assert!(matches!(result, Err(PlanningError::InvalidInput { stage: "feature preparation", .. })));
}}

can_reject_invalid_points! {
    case01_empty: Vec::<Point>::new(),
    case02_nan_latitude: vec![Point::new(1, Float::NAN, 0., 1.)],
    case03_latitude_out_of_range: vec![Point::new(1, 91., 0., 1.)],
    case04_longitude_out_of_range: vec![Point::new(1, 0., -180.5, 1.)],
    case05_duplicated_ids: vec![Point::new(1, 0., 0., 1.), Point::new(1, 1., 1., 1.)],
}

#[test]
fn can_keep_rows_aligned_with_points() {
    let points = create_two_groups_points();

    let features = prepare_features(&points, true).expect("should prepare features");

    assert_eq!(features.len(), points.len());
    assert!(features.rows[0][0] < 0. && features.rows[5][0] > 0.);
}
