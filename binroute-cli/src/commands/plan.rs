#[cfg(test)]
#[path = "../../tests/unit/commands/plan_test.rs"]
mod plan_test;

use super::*;
use binroute_cli::extensions::export::{write_labeled_points, write_report, write_route_summary};
use binroute_cli::extensions::plan::plan_from_readers;
use binroute_core::planning::PlanningReport;
use std::io::BufReader;

pub const POINTS_ARG_NAME: &str = "POINTS";
pub const CONFIG_ARG_NAME: &str = "config";
pub const OUT_LABELED_ARG_NAME: &str = "out-labeled";
pub const OUT_SUMMARY_ARG_NAME: &str = "out-summary";
pub const OUT_REPORT_ARG_NAME: &str = "out-report";
pub const TIME_ARG_NAME: &str = "max-time";
pub const LOG_ARG_NAME: &str = "log";

pub fn get_plan_app() -> Command {
    Command::new("plan")
        .about("Clusters collection points and builds a route per cluster")
        .arg(Arg::new(POINTS_ARG_NAME).help("Sets the point table file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the planning configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_LABELED_ARG_NAME)
                .help("Specifies path to the file for labeled points output")
                .long(OUT_LABELED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_SUMMARY_ARG_NAME)
                .help("Specifies path to the file for route summary output, stdout is used when omitted")
                .long(OUT_SUMMARY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_REPORT_ARG_NAME)
                .help("Specifies path to the file for json report output")
                .long(OUT_REPORT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time in seconds for cluster count selection")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(create_log_arg(LOG_ARG_NAME))
}

pub fn run_plan(matches: &ArgMatches) -> Result<(), String> {
    let points_path = get_required_value(matches, POINTS_ARG_NAME)?;
    let points_reader = BufReader::new(open_file(points_path, "points")?);
    let config_reader = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").map(BufReader::new))
        .transpose()?;

    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let environment = create_environment(matches.get_flag(LOG_ARG_NAME), max_time);

    let report = plan_from_readers(points_reader, config_reader, &environment)?;

    write_outputs(matches, &report)
}

fn write_outputs(matches: &ArgMatches, report: &PlanningReport) -> Result<(), String> {
    if let Some(path) = matches.get_one::<String>(OUT_LABELED_ARG_NAME) {
        let writer = BufWriter::new(create_file(path, "out labeled")?);
        write_labeled_points(writer, &report.labeled_points)
            .map_err(|err| format!("cannot write labeled points: '{err}'"))?;
    }

    if let Some(path) = matches.get_one::<String>(OUT_REPORT_ARG_NAME) {
        let writer = BufWriter::new(create_file(path, "out report")?);
        write_report(writer, report).map_err(|err| format!("cannot write report: '{err}'"))?;
    }

    let out_summary =
        matches.get_one::<String>(OUT_SUMMARY_ARG_NAME).map(|path| create_file(path, "out summary")).transpose()?;

    write_route_summary(create_write_buffer(out_summary), &report.routes)
        .map_err(|err| format!("cannot write route summary: '{err}'"))
}
