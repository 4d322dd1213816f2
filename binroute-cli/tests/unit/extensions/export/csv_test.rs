use super::*;
use binroute_core::models::ClusterLabel;
use binroute_core::routing::Tour;

fn write_to_string<F>(write_fn: F) -> String
where
    F: FnOnce(BufWriter<&mut Vec<u8>>) -> Result<(), GenericError>,
{
    let mut buffer = Vec::new();
    write_fn(BufWriter::new(&mut buffer)).expect("should write");

    String::from_utf8(buffer).expect("should be utf8")
}

#[test]
fn can_write_labeled_points_with_noise() {
    let points = vec![
        LabeledPoint { point: Point::new(1, 0.5, 1.5, 10.), cluster: ClusterLabel::Cluster(2) },
        LabeledPoint { point: Point::new_unweighted(2, 1., 2.), cluster: ClusterLabel::Noise },
    ];

    let result = write_to_string(|writer| write_labeled_points(writer, &points));

    assert_eq!(result, "id,latitude,longitude,waste_kg,cluster\n1,0.5,1.5,10.0,2\n2,1.0,2.0,,-1\n");
}

#[test]
fn can_write_route_summary_with_noise_group() {
    let routes = vec![
        ClusterRouteResult {
            cluster: ClusterLabel::Cluster(0),
            points: 3,
            tour: Tour::from_visits([1, 2, 3]),
            distance_km: 40.,
            fuel_liters: 10.,
            cost_currency: 900.,
            co2_kg: 107.2,
        },
        ClusterRouteResult {
            cluster: ClusterLabel::Noise,
            points: 1,
            tour: Tour::from_visits([4]),
            distance_km: 0.,
            fuel_liters: 0.,
            cost_currency: 0.,
            co2_kg: 0.,
        },
    ];

    let result = write_to_string(|writer| write_route_summary(writer, &routes));

    assert_eq!(
        result,
        "cluster,points,distance_km,fuel_liters,cost_currency,co2_kg\n0,3,40.0,10.0,900.0,107.2\n-1,1,0.0,0.0,0.0,0.0\n"
    );
}

#[test]
fn can_write_header_for_empty_table() {
    let result = write_to_string(|writer| write_route_summary(writer, &[]));

    assert_eq!(result, "cluster,points,distance_km,fuel_liters,cost_currency,co2_kg\n");
}

#[test]
fn can_write_points() {
    let points = vec![Point::new(7, 28.5, 77.25, 12.)];

    let result = write_to_string(|writer| write_points(writer, &points));

    assert_eq!(result, "id,latitude,longitude,waste_kg\n7,28.5,77.25,12.0\n");
}
