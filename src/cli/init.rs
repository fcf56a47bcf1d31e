//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;

use termhere::config::Config;

/// Write the commented default config.
/// Targets ~/.termhere/config.toml unless `--config` names another path.
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_template(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
