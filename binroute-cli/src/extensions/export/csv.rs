#[cfg(test)]
#[path = "../../../tests/unit/extensions/export/csv_test.rs"]
mod csv_test;

use binroute_core::metrics::ClusterRouteResult;
use binroute_core::models::{LabeledPoint, Point};
use binroute_core::utils::GenericError;
use serde::Serialize;
use std::io::{BufWriter, Write};

#[derive(Serialize)]
struct CsvPoint {
    id: i64,
    latitude: f64,
    longitude: f64,
    waste_kg: Option<f64>,
}

#[derive(Serialize)]
struct CsvLabeledPoint {
    id: i64,
    latitude: f64,
    longitude: f64,
    waste_kg: Option<f64>,
    cluster: i64,
}

#[derive(Serialize)]
struct CsvRouteSummary {
    cluster: i64,
    points: usize,
    distance_km: f64,
    fuel_liters: f64,
    cost_currency: f64,
    co2_kg: f64,
}

/// Writes a point table with `id,latitude,longitude,waste_kg` columns.
pub fn write_points<W: Write>(writer: BufWriter<W>, points: &[Point]) -> Result<(), GenericError> {
    write_rows(
        writer,
        &["id", "latitude", "longitude", "waste_kg"],
        points.iter().map(|point| CsvPoint {
            id: point.id,
            latitude: point.latitude,
            longitude: point.longitude,
            waste_kg: point.waste_kg,
        }),
    )
}

/// Writes a labeled point table with `id,latitude,longitude,waste_kg,cluster` columns. Noise is
/// written as `-1`.
pub fn write_labeled_points<W: Write>(writer: BufWriter<W>, points: &[LabeledPoint]) -> Result<(), GenericError> {
    write_rows(
        writer,
        &["id", "latitude", "longitude", "waste_kg", "cluster"],
        points.iter().map(|labeled| CsvLabeledPoint {
            id: labeled.point.id,
            latitude: labeled.point.latitude,
            longitude: labeled.point.longitude,
            waste_kg: labeled.point.waste_kg,
            cluster: labeled.cluster.as_value(),
        }),
    )
}

/// Writes a route summary table with one row per cluster. The noise group is written as `-1`.
pub fn write_route_summary<W: Write>(writer: BufWriter<W>, routes: &[ClusterRouteResult]) -> Result<(), GenericError> {
    write_rows(
        writer,
        &["cluster", "points", "distance_km", "fuel_liters", "cost_currency", "co2_kg"],
        routes.iter().map(|route| CsvRouteSummary {
            cluster: route.cluster.as_value(),
            points: route.points,
            distance_km: route.distance_km,
            fuel_liters: route.fuel_liters,
            cost_currency: route.cost_currency,
            co2_kg: route.co2_kg,
        }),
    )
}

/// Header is written even when there are no rows.
fn write_rows<W, T, I>(writer: BufWriter<W>, header: &[&str], rows: I) -> Result<(), GenericError>
where
    W: Write,
    T: Serialize,
    I: Iterator<Item = T>,
{
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(header).map_err(|err| format!("cannot write csv header: '{err}'"))?;
    rows.into_iter().try_for_each(|row| writer.serialize(row)).map_err(|err| format!("cannot write csv row: '{err}'"))?;
    writer.flush()?;

    Ok(())
}
