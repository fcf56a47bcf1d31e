//! Configuration loading and management

mod helper;
mod io;
mod settings;
mod tools;

pub use helper::HelperSettings;
pub use io::DEFAULT_CONFIG;
pub use settings::Settings;
pub use tools::ToolPaths;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Paths of the external utilities
    #[serde(default)]
    pub tools: ToolPaths,

    /// Generated helper contents and destination policy
    #[serde(default)]
    pub helper: HelperSettings,

    /// Pipeline behaviour
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Create a config with built-in defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Destination folder to start the form with
    pub fn initial_destination(&self) -> PathBuf {
        self.helper
            .default_destination
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(crate::platform::default_destination)
    }
}
