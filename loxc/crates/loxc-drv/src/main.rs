//! loxc - command-line driver for the Lox lexer.
//!
//! Parses arguments with clap, sets up logging, loads the configuration and
//! dispatches to the command handlers.
//!
//! Exit status: `0` for a clean scan, `65` when the source has lexical
//! errors, `1` when the driver itself fails, `2` for usage errors.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_tokenize, OutputFormat, ScanStatus, TokenizeArgs};
use config::Config;
use error::{DriverError, Result};

/// Environment variable holding `tracing` filter directives.
const LOG_ENV: &str = "LOXC_LOG";

/// loxc - tools for the Lox programming language
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the Lox programming language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the loxc CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Diagnostics go to standard error, tokens to standard output.
    Tokenize(TokenizeCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file to scan
    file: PathBuf,

    /// Token output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Accept emoji and other Unicode symbols in identifiers
    /// (default: from the configuration file, else true)
    #[arg(
        long,
        env = "LOXC_UNICODE_IDENTIFIERS",
        value_name = "BOOL",
        action = clap::ArgAction::Set
    )]
    unicode_identifiers: Option<bool>,
}

/// Main entry point for the loxc CLI.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Initializes logging, loads configuration and runs the selected command.
fn run(cli: Cli) -> anyhow::Result<ScanStatus> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration resolved");

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error. `LOXC_LOG` takes `tracing` filter directives;
/// without it the level is `debug` when verbose and `warn` otherwise.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> anyhow::Result<ScanStatus> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, &config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, config: &Config) -> anyhow::Result<ScanStatus> {
    let path = args.file;
    let tokenize_args = TokenizeArgs {
        path: path.clone(),
        format: args.format,
        lexer: config.lexer_config(args.unicode_identifiers),
    };
    run_tokenize(tokenize_args).with_context(|| format!("cannot tokenize {}", path.display()))
}
