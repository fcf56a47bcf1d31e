//! Native window for creating helpers
//!
//! A single form: pick the folder, name the helper, choose where it goes,
//! press Create. The status area shows verification output or the failure
//! message and can be copied.

pub mod app;
mod helpers;
mod render;
pub mod runner;
mod theme;

pub use app::LauncherApp;
pub use runner::{load_config, run_gui};
