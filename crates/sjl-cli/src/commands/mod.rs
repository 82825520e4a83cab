//! Command implementations for sjl-cli

pub mod candidates;
pub mod config;
pub mod plan;

pub use candidates::run_candidates;
pub use config::{ConfigOutput, run_config};
pub use plan::run_plan;
