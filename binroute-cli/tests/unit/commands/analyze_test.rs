use super::*;
use std::io::Read;

const POINTS_CSV: &str = "id,latitude,longitude,waste_kg
1,0,0,10
2,0,0.01,10
3,0.01,0,10
4,1,1,10
5,1,1.01,10
6,1.01,1,10
";

#[test]
fn can_analyze_clusters_from_args() {
    let mut points_file = tempfile::NamedTempFile::new().unwrap();
    points_file.write_all(POINTS_CSV.as_bytes()).unwrap();
    let out_file = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "analyze",
        points_file.path().to_str().unwrap(),
        "--geography-only",
        "--k-max",
        "4",
        "-o",
        out_file.path().to_str().unwrap(),
    ];
    let matches = get_analyze_app().try_get_matches_from(args).unwrap();

    run_analyze(&matches).unwrap();

    let mut result = String::new();
    out_file.reopen().unwrap().read_to_string(&mut result).unwrap();
    assert!(result.starts_with("features: latitude+longitude\n"));
    assert!(result.contains("best: k=2,"));
}

#[test]
fn can_fail_on_missing_points_file() {
    let args = vec!["analyze", "/definitely/missing/points.csv"];
    let matches = get_analyze_app().try_get_matches_from(args).unwrap();

    let result = run_analyze(&matches);

    assert!(result.is_err_and(|err| err.starts_with("cannot open points file")));
}

#[test]
fn can_analyze_with_hierarchical_strategy() {
    let mut points_file = tempfile::NamedTempFile::new().unwrap();
    points_file.write_all(POINTS_CSV.as_bytes()).unwrap();
    let out_file = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "analyze",
        points_file.path().to_str().unwrap(),
        "--strategy",
        "hierarchical",
        "--k",
        "2",
        "-o",
        out_file.path().to_str().unwrap(),
    ];
    let matches = get_analyze_app().try_get_matches_from(args).unwrap();

    run_analyze(&matches).unwrap();

    let mut result = String::new();
    out_file.reopen().unwrap().read_to_string(&mut result).unwrap();
    assert!(result.contains("hierarchical: k=2,"));
}

#[test]
fn can_require_k_for_hierarchical_strategy() {
    let args = vec!["analyze", "points.csv", "--strategy", "hierarchical"];

    assert!(get_analyze_app().try_get_matches_from(args).is_err());
}
