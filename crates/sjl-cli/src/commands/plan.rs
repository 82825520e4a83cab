//! Plan command implementation

use colored::Colorize;
use sjl_launcher::{LaunchInputs, LaunchPlan, LaunchResolver};

use crate::error::Result;

/// Run the plan command
pub fn run_plan(inputs: &LaunchInputs, json: bool) -> Result<()> {
    let plan = LaunchResolver::new(inputs.clone()).resolve()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_plan(&plan));
    }
    Ok(())
}

fn render_plan(plan: &LaunchPlan) -> String {
    let rows = [
        ("Working dir", &plan.working_dir),
        ("Config file", &plan.config_file),
        ("Runtime home", &plan.runtime_home),
        ("Launcher", &plan.launcher_artifact),
        ("Temp folder", &plan.temp_folder),
        ("PID file", &plan.pid_file_name),
    ];

    let mut out = format!("{}\n\n", "Launch Plan".bold());
    for (label, path) in rows {
        out.push_str(&format!("{:<14}{}\n", format!("{label}:").dimmed(), path.display()));
    }
    out.push('\n');
    for (label, command) in [
        ("Start", &plan.start_command),
        ("Stop", &plan.stop_command),
        ("Status", &plan.status_command),
    ] {
        out.push_str(&format!("{}:\n  {}\n", label.bold(), command.cyan()));
    }
    out
}
