use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod analyze;
pub mod generate;
pub mod plan;

use binroute_core::utils::Environment;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn get_required_value<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a str, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|value| value.as_str())
        .ok_or_else(|| format!("missing '{arg_name}' argument"))
}

fn create_log_arg(arg_name: &'static str) -> Arg {
    Arg::new(arg_name).help("Specifies whether default logging is enabled").long(arg_name).action(ArgAction::SetTrue)
}

/// Creates an environment with stdout logging when requested or a silent one otherwise.
fn create_environment(is_logging: bool, max_time: Option<usize>) -> Environment {
    let environment = Environment::new_with_time_quota(max_time);

    if is_logging { environment } else { Environment { logger: Arc::new(|_| {}), ..environment } }
}
