#[cfg(test)]
#[path = "../../tests/unit/commands/analyze_test.rs"]
mod analyze_test;

use super::*;
use binroute_cli::extensions::analyze::{get_clusters_analysis, get_hierarchical_analysis};
use binroute_core::clustering::SelectorConfig;
use std::io::BufReader;

pub const POINTS_ARG_NAME: &str = "POINTS";
pub const GEOGRAPHY_ONLY_ARG_NAME: &str = "geography-only";
pub const K_MIN_ARG_NAME: &str = "k-min";
pub const K_MAX_ARG_NAME: &str = "k-max";
pub const STRATEGY_ARG_NAME: &str = "strategy";
pub const K_ARG_NAME: &str = "k";
pub const SEED_ARG_NAME: &str = "seed";
pub const LOG_ARG_NAME: &str = "log";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_analyze_app() -> Command {
    Command::new("analyze")
        .about("Scores candidate cluster counts of the point table")
        .arg(Arg::new(POINTS_ARG_NAME).help("Sets the point table file to use").required(true).index(1))
        .arg(
            Arg::new(GEOGRAPHY_ONLY_ARG_NAME)
                .help("Excludes waste weight from clustering features")
                .long(GEOGRAPHY_ONLY_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new(K_MIN_ARG_NAME).help("Minimum candidate cluster count").long(K_MIN_ARG_NAME).required(false))
        .arg(Arg::new(K_MAX_ARG_NAME).help("Maximum candidate cluster count").long(K_MAX_ARG_NAME).required(false))
        .arg(
            Arg::new(STRATEGY_ARG_NAME)
                .help("Specifies clustering strategy: k-means scan over cluster counts or hierarchical with fixed k")
                .long(STRATEGY_ARG_NAME)
                .value_parser(["kmeans", "hierarchical"])
                .default_value("kmeans"),
        )
        .arg(
            Arg::new(K_ARG_NAME)
                .help("Cluster count for hierarchical strategy")
                .long(K_ARG_NAME)
                .required_if_eq(STRATEGY_ARG_NAME, "hierarchical"),
        )
        .arg(Arg::new(SEED_ARG_NAME).help("Specifies a random seed").long(SEED_ARG_NAME).required(false))
        .arg(create_log_arg(LOG_ARG_NAME))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_analyze(matches: &ArgMatches) -> Result<(), String> {
    let points_path = get_required_value(matches, POINTS_ARG_NAME)?;
    let points_reader = BufReader::new(open_file(points_path, "points")?);

    let include_weight = !matches.get_flag(GEOGRAPHY_ONLY_ARG_NAME);
    let environment = create_environment(matches.get_flag(LOG_ARG_NAME), None);

    let analysis = match matches.get_one::<String>(STRATEGY_ARG_NAME).map(|strategy| strategy.as_str()) {
        Some("hierarchical") => {
            let k = parse_int_value(matches, K_ARG_NAME, "k")?
                .ok_or_else(|| format!("missing '{K_ARG_NAME}' argument"))?;
            get_hierarchical_analysis(points_reader, include_weight, k, &environment)
        }
        _ => {
            let defaults = SelectorConfig::default();
            let config = SelectorConfig {
                k_min: parse_int_value(matches, K_MIN_ARG_NAME, "k min")?.unwrap_or(defaults.k_min),
                k_max: parse_int_value(matches, K_MAX_ARG_NAME, "k max")?.unwrap_or(defaults.k_max),
                seed: parse_int_value(matches, SEED_ARG_NAME, "seed")?.unwrap_or(defaults.seed),
                ..defaults
            };

            get_clusters_analysis(points_reader, include_weight, &config, &environment)
        }
    }
    .map_err(|err| format!("cannot analyze clusters: '{err}'"))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut writer = create_write_buffer(out_result);

    writer.write_all(analysis.as_bytes()).map_err(|err| format!("cannot write result: '{err}'"))
}
