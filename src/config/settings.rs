//! Settings configuration types

use serde::{Deserialize, Serialize};

/// Behaviour toggles for the create pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// List failed best-effort finishing steps (signing, quarantine removal,
    /// chmod) in the status under "Warnings".
    /// When false (default), those failures are only logged.
    #[serde(default)]
    pub report_finishing_failures: bool,

    /// Reveal the new bundle in Finder after a successful create
    #[serde(default = "default_true")]
    pub reveal_after_create: bool,

    /// Run spctl and `codesign -dv` after a successful create and include
    /// their output in the status
    #[serde(default = "default_true")]
    pub verify_after_create: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_finishing_failures: false,
            reveal_after_create: default_true(),
            verify_after_create: default_true(),
        }
    }
}
