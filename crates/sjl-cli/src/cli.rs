//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sjl_launcher::inputs::{CONFIG_FILE_VAR, JAVA_HOME_VAR, WORKING_DIRECTORY_VAR};

/// sjl - Resolve the launch configuration of an sjl application
#[derive(Parser, Debug)]
#[command(name = "sjl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub inputs: InputArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for the launcher environment inputs
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArgs {
    /// Application working directory
    #[arg(long, global = true, env = WORKING_DIRECTORY_VAR, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Config file to use instead of searching the candidate list
    #[arg(long, global = true, env = CONFIG_FILE_VAR, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Runtime home used when the config file names none
    #[arg(long, global = true, env = JAVA_HOME_VAR, value_name = "DIR")]
    pub java_home: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the launch plan and print its commands
    Plan {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Discover and parse the config file without validating it
    Config {
        /// Output as JSON for scripting
        #[arg(long, conflicts_with = "properties")]
        json: bool,

        /// Output as a key-value document
        #[arg(long)]
        properties: bool,
    },

    /// List config file candidates in probe order
    Candidates,
}
