use super::*;
use binroute_cli::extensions::import::read_points;
use std::io::BufReader;

#[test]
fn can_generate_points_from_args() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "generate",
        "--points",
        "25",
        "--center-lat",
        "-33.8688",
        "--center-lng",
        "151.2093",
        "--spread-km",
        "2",
        "--seed",
        "11",
        "-o",
        tmpfile.path().to_str().unwrap(),
    ];
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    run_generate(&matches).unwrap();

    let points = read_points(BufReader::new(tmpfile.reopen().unwrap())).unwrap();
    assert_eq!(points.len(), 25);
    assert!(points.iter().all(|point| (point.latitude + 33.8688).abs() < 0.02));
    assert!(points.iter().all(|point| point.waste_kg.is_some()));
}

#[test]
fn can_reject_invalid_number() {
    let args = vec!["generate", "--points", "many"];
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    let result = run_generate(&matches);

    assert!(result.is_err_and(|err| err.contains("points")));
}
