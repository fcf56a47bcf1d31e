//! CLI command implementations

pub mod create;
pub mod init;
pub mod reveal;
pub mod script;

use anyhow::Result;
use std::path::Path;

use termhere::config::Config;

/// Load the config named by `--config`, or the global one
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
