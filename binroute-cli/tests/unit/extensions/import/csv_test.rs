use super::*;
use crate::helpers::TWO_GROUPS_CSV;

fn read_from_str(content: &str) -> Result<Vec<Point>, PlanningError> {
    read_points(BufReader::new(content.as_bytes()))
}

#[test]
fn can_read_points_with_weight() {
    let points = read_from_str(TWO_GROUPS_CSV).expect("should read points");

    assert_eq!(points.len(), 6);
    assert_eq!(points[1], Point::new(2, 0., 0.01, 10.));
}

#[test]
fn can_read_points_without_weight_column() {
    let points = read_from_str("id,latitude,longitude\n1,28.7,77.1\n2,28.8,77.2\n").expect("should read points");

    assert_eq!(points, vec![Point::new_unweighted(1, 28.7, 77.1), Point::new_unweighted(2, 28.8, 77.2)]);
}

#[test]
fn can_read_points_with_empty_weight_and_extra_columns() {
    let content = "name,id,latitude,longitude,waste_kg\nfirst, 1, 28.7, 77.1, \nsecond,2,28.8,77.2,5\n";

    let points = read_from_str(content).expect("should read points");

    assert_eq!(points[0].waste_kg, None);
    assert_eq!(points[1].waste_kg, Some(5.));
}

parameterized_test! {can_reject_malformed_table, (content, expected_details), {
    let result = read_from_str(content);

    match result {
        Err(PlanningError::InvalidInput { stage, details }) => {
            assert_eq!(stage, "import");
            assert!(details.contains(expected_details), "unexpected details: {details}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}}

can_reject_malformed_table! {
    case01_missing_longitude: ("id,latitude,waste_kg\n1,0,10\n", "missing required column(s): longitude"),
    case02_missing_all: ("a,b\n1,2\n", "missing required column(s): id, latitude, longitude"),
    case03_bad_value: ("id,latitude,longitude\n1,0,0\n2,north,0\n", "cannot read row 2"),
}
