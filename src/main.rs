mod cli;
mod error;
mod output;
mod runner;
mod timezone;

use std::{env, ffi::OsString, io, path::Path, process::ExitCode};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::Cli,
    error::AppError,
    timezone::{ErrorRecord, ResultRecord, TzfLookup},
};

/// Reads the locations file named on the command line, resolves each location to an IANA
/// timezone and prints the results as one line of JSON on stdout. Failures of the run as a
/// whole are printed as a single `{"error": ...}` object instead. Diagnostics go to stderr
/// and are controlled with `RUST_LOG`.
fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<OsString> = env::args_os().collect();
    // honored even when the rest of the command line is rejected
    let mut fail_on_error = args.iter().skip(1).any(|arg| arg == "--fail-on-error");

    let outcome = Cli::parse_args(args).and_then(|cli| {
        fail_on_error = cli.fail_on_error;
        if !cli.ignored.is_empty() {
            warn!("Ignoring {} arguments after the input path", cli.ignored.len());
        }
        resolve_input(cli.input.as_deref())
    });

    let stdout = io::stdout().lock();
    match outcome {
        Ok(results) => {
            info!("Resolved {} locations", results.len());
            output::write_line(stdout, &results).map_err(AppError::WriteOutput)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Failed to resolve locations: {}", e);
            output::write_line(stdout, &ErrorRecord::from(&e)).map_err(AppError::WriteOutput)?;
            if fail_on_error {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn resolve_input(input: Option<&Path>) -> Result<Vec<ResultRecord>, AppError> {
    let locations = runner::load_locations(input)?;
    // the boundary index is only built once the input is known to be a list
    let lookup = TzfLookup::new();
    Ok(runner::resolve_all(&lookup, &locations))
}
