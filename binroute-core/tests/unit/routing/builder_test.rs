use super::*;
use crate::helpers::models::create_points_from_coordinates;

const DEGREE_ON_EQUATOR: Float = 6_378.137 * std::f64::consts::PI / 180.;

#[test]
fn can_build_route_over_collinear_points() {
    let points = create_points_from_coordinates(&[(0., 0.), (0., 1.), (0., 2.), (0., 3.)]);
    let points = points.iter().collect::<Vec<_>>();

    let (tour, distance) = build_cluster_route(ClusterLabel::Cluster(0), &points).expect("should build route");

    assert_eq!(tour.ids(), &[1, 2, 3, 4, 1]);
    assert!((distance - 6. * DEGREE_ON_EQUATOR).abs() < 1E-6);
}

#[test]
fn can_start_from_first_point_in_input_order() {
    let points = create_points_from_coordinates(&[(0., 2.), (0., 0.), (0., 2.5), (0., 1.)]);
    let points = points.iter().collect::<Vec<_>>();

    let (tour, distance) = build_cluster_route(ClusterLabel::Cluster(0), &points).expect("should build route");

    // 2 -> 2.5 -> 1 -> 0 -> 2 in degrees of longitude
    assert_eq!(tour.ids(), &[1, 3, 4, 2, 1]);
    assert!((distance - 5. * DEGREE_ON_EQUATOR).abs() < 1E-6);
}

#[test]
fn can_build_route_for_single_point() {
    let points = create_points_from_coordinates(&[(28.7, 77.1)]);
    let points = points.iter().collect::<Vec<_>>();

    let (tour, distance) = build_cluster_route(ClusterLabel::Cluster(0), &points).expect("should build route");

    assert_eq!(tour.ids(), &[1, 1]);
    assert_eq!(distance, 0.);
}

#[test]
fn can_fail_on_empty_cluster() {
    let result = build_cluster_route(ClusterLabel::Cluster(4), &[]);

    assert_eq!(result.err(), Some(PlanningError::EmptyCluster { cluster: ClusterLabel::Cluster(4) }));
}
