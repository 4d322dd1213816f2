//! A command line interface to plan waste collection routes.
//!
//! ## Usage
//!
//! - generate a random point table around a city center
//!
//!     `binroute generate --points 300 --seed 42 -o points.csv`
//!
//! - inspect quality of candidate cluster counts
//!
//!     `binroute analyze points.csv --k-min 2 --k-max 10`
//!
//! - cluster points and build a route per cluster
//!
//!     `binroute plan points.csv --out-labeled labeled.csv --out-summary summary.csv --log`
//!
//! For more details, simply run
//!
//!     binroute --help

mod commands;

use self::commands::analyze::{get_analyze_app, run_analyze};
use self::commands::generate::{get_generate_app, run_generate};
use self::commands::plan::{get_plan_app, run_plan};
use clap::Command;
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        Some(("analyze", analyze_matches)) => run_analyze(analyze_matches),
        Some(("plan", plan_matches)) => run_plan(plan_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Waste Collection Route Planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to cluster waste collection points and plan a route per cluster")
        .subcommand(get_generate_app())
        .subcommand(get_analyze_app())
        .subcommand(get_plan_app())
}
