//! exgen CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Missing or invalid input, missing source folder, or write failure
//! - 2: Invalid command-line syntax (reported by clap)

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands, Context};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    ExitCode::from(report(run(cli)))
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::load(cli.project_dir)?;
    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &ctx),
        Commands::Api(args) => commands::api::execute(args, &ctx),
        Commands::Auth(args) => commands::auth::execute(args, &ctx),
    }
}

/// Print a failed run's error chain and map the outcome to an exit code.
fn report(result: Result<()>) -> u8 {
    match result {
        Ok(()) => ExitCodes::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCodes::FAILURE
        }
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "warn,exgen_cli=debug,exgen_core=debug,exgen_templates=debug"
    } else {
        "warn,exgen_cli=info,exgen_core=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}
