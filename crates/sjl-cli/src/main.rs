//! sjl launcher CLI
//!
//! Resolves the launch plan of an sjl application and prints it. The
//! commands are never executed.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use sjl_launcher::LaunchInputs;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, InputArgs};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    match cli.command {
        Some(cmd) => {
            let inputs = launch_inputs(&cli.inputs)?;
            execute_command(cmd, &inputs)
        }
        None => {
            println!("{} sjl launcher", "sjl".green().bold());
            println!();
            println!("Run {} for available commands.", "sjl --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr. `--verbose` forces DEBUG, otherwise `RUST_LOG` or `warn`.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

/// Environment inputs with flag overrides applied. Empty flags count as unset.
fn launch_inputs(args: &InputArgs) -> Result<LaunchInputs> {
    let mut inputs = LaunchInputs::from_env()?;
    if let Some(path) = non_empty(&args.working_dir) {
        inputs = inputs.with_working_dir(path);
    }
    if let Some(path) = non_empty(&args.config_file) {
        inputs = inputs.with_config_file(path);
    }
    if let Some(path) = non_empty(&args.java_home) {
        inputs = inputs.with_java_home(path);
    }
    Ok(inputs)
}

fn non_empty(path: &Option<PathBuf>) -> Option<PathBuf> {
    path.clone().filter(|path| !path.as_os_str().is_empty())
}

fn execute_command(cmd: Commands, inputs: &LaunchInputs) -> Result<()> {
    match cmd {
        Commands::Plan { json } => commands::run_plan(inputs, json),
        Commands::Config { json, properties } => {
            let output = match (json, properties) {
                (true, _) => commands::ConfigOutput::Json,
                (false, true) => commands::ConfigOutput::Properties,
                (false, false) => commands::ConfigOutput::Text,
            };
            commands::run_config(inputs, output)
        }
        Commands::Candidates => commands::run_candidates(inputs),
    }
}
