use super::*;

fn create_two_blobs() -> Vec<Vec<Float>> {
    vec![vec![0., 0.], vec![0., 1.], vec![1., 0.], vec![10., 10.], vec![10., 11.], vec![11., 10.]]
}

#[test]
fn can_separate_two_blobs() {
    let result = KMeans::new(2, 42).fit(&create_two_blobs()).expect("should cluster");

    let labels = &result.labels;
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[1], labels[2]);
    assert_eq!(labels[3], labels[4]);
    assert_eq!(labels[4], labels[5]);
    assert_ne!(labels[0], labels[3]);
    assert!((result.inertia - 8. / 3.).abs() < 1E-9);
}

#[test]
fn can_return_same_result_for_same_seed() {
    let data = (0..50).map(|idx| vec![(idx % 7) as Float, (idx * 13 % 11) as Float]).collect::<Vec<_>>();

    let first = KMeans::new(4, 7).fit(&data).expect("should cluster");
    let second = KMeans::new(4, 7).fit(&data).expect("should cluster");

    assert_eq!(first.labels, second.labels);
    assert_eq!(first.inertia, second.inertia);
}

parameterized_test! {can_reject_invalid_k, (k, size), {
    let data = create_two_blobs().into_iter().take(size).collect::<Vec<_>>();

    assert!(KMeans::new(k, 42).fit(&data).is_none());
}}

can_reject_invalid_k! {
    case01_zero: (0, 6),
    case02_too_many: (4, 3),
}

#[test]
fn can_handle_duplicated_points() {
    let data = vec![vec![1., 1.]; 5];

    let result = KMeans::new(3, 42).with_n_init(3).fit(&data).expect("should cluster");

    assert_eq!(result.labels.len(), 5);
    assert_eq!(result.inertia, 0.);
}
