//! Shared test utilities for the sjl launcher workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`app`] - [`TestApp`](app::TestApp) builder for application directory layouts
//! - [`fixtures`] - paths into the checked-in `test-fixtures/` tree

pub mod app;
pub mod fixtures;

pub use app::TestApp;
