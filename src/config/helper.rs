//! What goes into the generated helper and where it lands

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperSettings {
    /// Terminal application the helper opens its `.command` file with
    #[serde(default = "default_terminal_app")]
    pub terminal_app: String,

    /// Login shell exec'd inside the target folder
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Where bundles are written unless the user picks another folder.
    /// Unset means the user's Downloads folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_destination: Option<PathBuf>,

    /// Destinations containing this substring are refused
    /// (sandboxed app container). Empty disables the check.
    #[serde(default = "default_sandbox_marker")]
    pub sandbox_marker: String,

    /// Prepended to the source folder name to suggest a helper name
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
}

fn default_terminal_app() -> String {
    "/System/Applications/Utilities/Terminal.app".to_string()
}

fn default_shell() -> String {
    "/bin/zsh".to_string()
}

fn default_sandbox_marker() -> String {
    "/Library/Containers/".to_string()
}

fn default_name_prefix() -> String {
    "Open Terminal at ".to_string()
}

impl Default for HelperSettings {
    fn default() -> Self {
        Self {
            terminal_app: default_terminal_app(),
            shell: default_shell(),
            default_destination: None,
            sandbox_marker: default_sandbox_marker(),
            name_prefix: default_name_prefix(),
        }
    }
}
