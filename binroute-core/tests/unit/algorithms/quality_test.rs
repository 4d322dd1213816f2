use super::*;

fn create_separated_data() -> (Vec<Vec<Float>>, Vec<usize>) {
    (vec![vec![0., 0.], vec![0., 1.], vec![10., 0.], vec![10., 1.]], vec![0, 0, 1, 1])
}

#[test]
fn can_calculate_silhouette_score() {
    let (data, labels) = create_separated_data();

    let score = silhouette_score(&data, &labels).expect("should be defined");

    // a = 1, b = (10 + sqrt(101)) / 2 for every point
    let b = (10. + (101. as Float).sqrt()) / 2.;
    assert!((score - (b - 1.) / b).abs() < 1E-9);
}

#[test]
fn can_calculate_davies_bouldin_score() {
    let (data, labels) = create_separated_data();

    let score = davies_bouldin_score(&data, &labels).expect("should be defined");

    assert!((score - 0.1).abs() < 1E-9);
}

#[test]
fn can_calculate_calinski_harabasz_score() {
    let (data, labels) = create_separated_data();

    let score = calinski_harabasz_score(&data, &labels).expect("should be defined");

    // between = 4 * 25 = 100, within = 4 * 0.25 = 1, (n - k) / (k - 1) = 2
    assert!((score - 200.).abs() < 1E-9);
}

parameterized_test! {can_return_none_for_undefined_labeling, labels, {
    let data = vec![vec![0.], vec![1.], vec![2.]];

    assert_eq!(silhouette_score(&data, &labels), None);
    assert_eq!(davies_bouldin_score(&data, &labels), None);
    assert_eq!(calinski_harabasz_score(&data, &labels), None);
}}

can_return_none_for_undefined_labeling! {
    case01_single_label: vec![0, 0, 0],
    case02_all_distinct: vec![0, 1, 2],
}

#[test]
fn can_score_singleton_group_with_zero_silhouette() {
    let data = vec![vec![0.], vec![1.], vec![10.]];

    let score = silhouette_score(&data, &[0, 0, 1]).expect("should be defined");

    // a = 1, b = 10 and 9 for two grouped points, zero for the singleton
    let expected = ((10. - 1.) / 10. + (9. - 1.) / 9.) / 3.;
    assert!((score - expected).abs() < 1E-9);
}

#[test]
fn can_densify_labels_in_order_of_appearance() {
    assert_eq!(densify_labels(&[7, 3, 7, 9]), (vec![0, 1, 0, 2], 3));
}
