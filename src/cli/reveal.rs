//! Reveal command implementation

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use termhere::platform;
use termhere::tools::SystemRunner;

/// Reveal `dest` (or the configured destination) in Finder
pub fn reveal_command(config_path: Option<&Path>, dest: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let dest = dest.unwrap_or_else(|| config.initial_destination());

    let record = platform::reveal(&SystemRunner, &config.tools, &dest);
    if !record.succeeded() {
        bail!("Could not reveal {}", dest.display());
    }

    Ok(())
}
