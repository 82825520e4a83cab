//! Config command implementation

use std::path::Path;

use colored::Colorize;
use sjl_config::{ConfigKey, ResolvedConfiguration};
use sjl_launcher::{LaunchInputs, LaunchResolver};

use crate::error::Result;

/// How the parsed configuration is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOutput {
    Text,
    Json,
    Properties,
}

/// Run the config command
pub fn run_config(inputs: &LaunchInputs, output: ConfigOutput) -> Result<()> {
    let resolver = LaunchResolver::new(inputs.clone());
    let working_dir = resolver.working_directory()?;
    let (config_file, config) = resolver.load_configuration(&working_dir)?;

    match output {
        ConfigOutput::Json => {
            let value = serde_json::json!({
                "configFile": config_file,
                "configuration": config,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ConfigOutput::Properties => print!("{}", config.to_properties()),
        ConfigOutput::Text => print!("{}", render_config(&config_file, &config)),
    }
    Ok(())
}

fn render_config(config_file: &Path, config: &ResolvedConfiguration) -> String {
    let mut out = format!("{}\n\n", "Configuration".bold());
    out.push_str(&format!("{}:  {}\n\n", "File".dimmed(), config_file.display()));

    for key in ConfigKey::ALL {
        if key == ConfigKey::Args {
            continue;
        }
        let value = match config.get(key) {
            Some(value) => value.cyan().to_string(),
            None => "(default)".dimmed().to_string(),
        };
        out.push_str(&format!("{}: {}\n", key.qualified(), value));
    }

    out.push_str(&format!("{}:\n", ConfigKey::Args.qualified()));
    if config.args.is_empty() {
        out.push_str(&format!("  {}\n", "None".dimmed()));
    }
    for arg in &config.args {
        out.push_str(&format!("  {} {}\n", "+".green(), arg));
    }
    out
}
