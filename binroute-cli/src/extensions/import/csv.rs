#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use binroute_core::models::Point;
use binroute_core::utils::PlanningError;
use serde::Deserialize;
use std::io::{BufReader, Read};

const STAGE: &str = "import";
const REQUIRED_COLUMNS: &[&str] = &["id", "latitude", "longitude"];

#[derive(Debug, Deserialize)]
struct CsvPoint {
    id: i64,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    waste_kg: Option<f64>,
}

/// Reads a point table with `id,latitude,longitude[,waste_kg]` columns.
pub fn read_points<R: Read>(reader: BufReader<R>) -> Result<Vec<Point>, PlanningError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|err| PlanningError::invalid_input(STAGE, format!("cannot read csv header: '{err}'")))?
        .clone();

    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .copied()
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        return Err(PlanningError::invalid_input(STAGE, format!("missing required column(s): {}", missing.join(", "))));
    }

    reader
        .deserialize::<CsvPoint>()
        .enumerate()
        .map(|(idx, entry)| {
            entry
                .map(|point: CsvPoint| Point {
                    id: point.id,
                    latitude: point.latitude,
                    longitude: point.longitude,
                    waste_kg: point.waste_kg,
                })
                .map_err(|err| PlanningError::invalid_input(STAGE, format!("cannot read row {}: '{err}'", idx + 1)))
        })
        .collect()
}
