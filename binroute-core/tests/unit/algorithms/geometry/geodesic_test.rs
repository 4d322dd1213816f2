use super::*;

const DEGREE_ON_EQUATOR: Float = WGS84_A * std::f64::consts::PI / 180.;

#[test]
fn can_calculate_distance_along_equator() {
    let distance = geodesic_distance((0., 0.), (0., 1.));

    assert!((distance - DEGREE_ON_EQUATOR).abs() < 1E-6);
}

#[test]
fn can_return_zero_for_same_point() {
    assert_eq!(geodesic_distance((28.7041, 77.1025), (28.7041, 77.1025)), 0.);
}

#[test]
fn can_calculate_symmetric_distance() {
    let (a, b) = ((28.7041, 77.1025), (28.65, 77.2));

    let forward = geodesic_distance(a, b);
    let backward = geodesic_distance(b, a);

    assert!((forward - backward).abs() < 1E-9);
    assert!(forward > 10. && forward < 12.);
}

#[test]
fn can_approximate_geodesic_with_haversine() {
    let (a, b) = ((51.5074, -0.1278), (48.8566, 2.3522));

    let geodesic = geodesic_distance(a, b);
    let haversine = haversine_distance(a, b);

    assert!((geodesic - 343.9).abs() < 1.);
    assert!((geodesic - haversine).abs() / geodesic < 0.005);
}

#[test]
fn can_fallback_to_haversine_for_antipodal_points() {
    let distance = geodesic_distance((0., 0.), (0.5, 179.7));

    assert!(distance.is_finite());
    assert!(distance > 19_900. && distance < 20_100.);
}
