//! Candidates command implementation

use std::path::Path;

use colored::Colorize;
use sjl_fs::{ConfigCandidate, path_exists};
use sjl_launcher::{LaunchInputs, LaunchResolver, first_existing_candidate};

use crate::error::Result;

/// Run the candidates command
pub fn run_candidates(inputs: &LaunchInputs) -> Result<()> {
    let resolver = LaunchResolver::new(inputs.clone());
    let working_dir = resolver.working_directory()?;
    print!("{}", render_candidates(&working_dir, inputs.config_file.as_deref()));
    Ok(())
}

fn render_candidates(working_dir: &Path, override_path: Option<&Path>) -> String {
    let mut out = format!("{}\n\n", "Config Candidates".bold());
    out.push_str(&format!("{}:  {}\n", "Working dir".dimmed(), working_dir.display()));
    if let Some(path) = override_path {
        out.push_str(&format!(
            "{}:     {} (candidates are not searched)\n",
            "Override".dimmed(),
            path.display().to_string().yellow()
        ));
    }
    out.push('\n');

    let selected = match override_path {
        Some(_) => None,
        None => first_existing_candidate(working_dir).map(|(candidate, _)| candidate),
    };

    for candidate in ConfigCandidate::ALL {
        let line = if Some(candidate) == selected {
            format!("  {} {} (selected)\n", "*".green().bold(), candidate.as_str().green())
        } else if path_exists(candidate.under(working_dir)) {
            format!("  {} {}\n", "+".yellow(), candidate.as_str())
        } else {
            format!("  {} {}\n", "-".dimmed(), candidate.as_str().dimmed())
        };
        out.push_str(&line);
    }
    out
}
