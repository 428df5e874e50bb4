//! # pcreate
//!
//! Render one or more web application scaffolds into a new project directory.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version`).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`] and the adapters.
//! 5. Run the create service.
//! 6. Translate the outcome into an exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! |  0   | Success                              |
//! |  1   | Internal / system error              |
//! |  2   | Usage error (bad arguments, request) |
//! |  3   | Resource not found                   |
//! |  4   | Configuration error                  |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use pcreate_adapters::InMemoryCatalog;
use pcreate_core::application::{CreateService, ExitStatus};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too, with exit code 0.
            let code = e.exit_code();
            let _ = e.print();
            return ExitCode::from(u8::try_from(code).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Run + 6. Exit code ─────────────────────────────────────────────
    match run(&cli, &config, output) {
        Ok(status) => {
            info!(code = status.code(), "pcreate finished");
            ExitCode::from(status.code())
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Wire the adapters into the create service and run the invocation.
#[instrument(skip_all)]
fn run(cli: &Cli, config: &AppConfig, output: OutputManager) -> CliResult<ExitStatus> {
    let working_dir =
        std::env::current_dir().with_cli_context(|| "reading the current directory")?;
    let catalog = InMemoryCatalog::with_builtin()?;

    let service = CreateService::new(
        Box::new(catalog),
        Box::new(config.distribution()),
        Box::new(output.clone()),
        working_dir,
    );

    let invocation = cli.to_invocation();
    let status = service.run(&invocation)?;

    if status == ExitStatus::Success && !invocation.wants_list() {
        let message = if invocation.simulate() {
            "Simulation finished, nothing was written".to_owned()
        } else {
            format!(
                "Rendered {} into '{}'",
                invocation.scaffolds().join(", "),
                invocation.project().unwrap_or_default()
            )
        };
        output
            .success(&message)
            .with_cli_context(|| "writing to stdout")?;
    }

    Ok(status)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message appears even when stdout is redirected.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
