//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Commented config written by `termhere init`
pub const DEFAULT_CONFIG: &str = r#"# termhere configuration
# ======================
#
# Every key is optional; missing keys fall back to the values shown here.

# ============================================================================
# TOOLS - absolute paths of the macOS utilities that build the helper
# ============================================================================

[tools]
osacompile = "/usr/bin/osacompile"
codesign = "/usr/bin/codesign"
xattr = "/usr/bin/xattr"
chmod = "/bin/chmod"
spctl = "/usr/sbin/spctl"
open = "/usr/bin/open"

# ============================================================================
# HELPER - what the generated app does and where it goes
# ============================================================================
#
#   terminal_app        - Terminal application that opens the .command file
#   shell               - Login shell started inside the chosen folder
#   default_destination - Folder new helpers are saved to (default: ~/Downloads)
#   sandbox_marker      - Destinations containing this text are refused
#   name_prefix         - Suggested helper name = prefix + folder name

[helper]
terminal_app = "/System/Applications/Utilities/Terminal.app"
shell = "/bin/zsh"
# default_destination = "/Users/Shared"
sandbox_marker = "/Library/Containers/"
name_prefix = "Open Terminal at "

# ============================================================================
# SETTINGS
# ============================================================================
#
#   report_finishing_failures - List failed signing/quarantine/chmod steps in the status
#   reveal_after_create       - Reveal the new app in Finder
#   verify_after_create       - Append spctl and codesign -dv output to the status

[settings]
report_finishing_failures = false
reveal_after_create = true
verify_after_create = true
"#;

impl Config {
    /// Get the global config directory path (~/.termhere/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".termhere")
    }

    /// Get the global config file path (~/.termhere/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the config at `path`, or built-in defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::with_defaults());
        }
        Self::from_file(path)
    }

    /// Load global configuration from ~/.termhere/config.toml
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::global_config_path())
    }

    /// Write the commented default template to `path`.
    ///
    /// The parent directory is created if needed. An exclusive lock on a
    /// sibling `.lock` file serializes concurrent writers; content goes to a
    /// temp file that is renamed over the target.
    pub fn write_template(path: &Path) -> Result<()> {
        write_locked(path, DEFAULT_CONFIG)
    }
}

fn write_locked(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    // Separate lock file so the rename below cannot drop the lock
    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    Ok(())
}
