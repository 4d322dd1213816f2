#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use binroute_cli::extensions::export::write_points;
use binroute_cli::extensions::generate::{SimulationConfig, simulate_points};

pub const POINTS_ARG_NAME: &str = "points";
pub const CENTER_LAT_ARG_NAME: &str = "center-lat";
pub const CENTER_LNG_ARG_NAME: &str = "center-lng";
pub const SPREAD_KM_ARG_NAME: &str = "spread-km";
pub const SEED_ARG_NAME: &str = "seed";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a random point table around a city center")
        .arg(
            Arg::new(POINTS_ARG_NAME)
                .help("Amount of points to generate")
                .short('n')
                .long(POINTS_ARG_NAME)
                .required(false)
                .default_value("300"),
        )
        .arg(
            Arg::new(CENTER_LAT_ARG_NAME)
                .help("Latitude of the area center")
                .long(CENTER_LAT_ARG_NAME)
                .required(false)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new(CENTER_LNG_ARG_NAME)
                .help("Longitude of the area center")
                .long(CENTER_LNG_ARG_NAME)
                .required(false)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new(SPREAD_KM_ARG_NAME)
                .help("Max offset from the center in kilometers along each axis")
                .long(SPREAD_KM_ARG_NAME)
                .required(false),
        )
        .arg(Arg::new(SEED_ARG_NAME).help("Specifies a random seed").long(SEED_ARG_NAME).required(false))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let config = get_simulation_config(matches)?;
    let points = simulate_points(&config).map_err(|err| format!("cannot generate points: '{err}'"))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_points(create_write_buffer(out_result), &points).map_err(|err| format!("cannot write points: '{err}'"))
}

fn get_simulation_config(matches: &ArgMatches) -> Result<SimulationConfig, String> {
    let defaults = SimulationConfig::default();

    Ok(SimulationConfig {
        points: parse_int_value(matches, POINTS_ARG_NAME, "points")?.unwrap_or(defaults.points),
        center_lat: parse_float_value(matches, CENTER_LAT_ARG_NAME, "center latitude")?.unwrap_or(defaults.center_lat),
        center_lng: parse_float_value(matches, CENTER_LNG_ARG_NAME, "center longitude")?.unwrap_or(defaults.center_lng),
        spread_km: parse_float_value(matches, SPREAD_KM_ARG_NAME, "spread")?.unwrap_or(defaults.spread_km),
        seed: parse_int_value(matches, SEED_ARG_NAME, "seed")?.unwrap_or(defaults.seed),
        ..defaults
    })
}
