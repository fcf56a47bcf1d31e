//! Script command implementation

use anyhow::{Context, Result};
use std::path::Path;

use termhere::builder::HelperBuilder;
use termhere::tools::SystemRunner;

/// Print the AppleScript a helper for `source` would be compiled from
pub fn script_command(config_path: Option<&Path>, source: &Path) -> Result<()> {
    let config = super::load_config(config_path)?;
    let source = std::path::absolute(source)
        .with_context(|| format!("Invalid source path: {}", source.display()))?;

    let builder = HelperBuilder::new(&config, &SystemRunner);
    print!("{}", builder.script_for(&source));

    Ok(())
}
