//! Failures that end a create attempt
//!
//! The `Display` output of every variant is the exact text shown in the
//! status log, so wording changes here are user-visible.

use std::path::{Path, PathBuf};

use super::Stage;

/// Shown after a compiler failure
pub const COMPILE_TIP: &str = "Tip: If you chose a protected folder, pick a different destination (e.g., ~/Applications or /Users/Shared) via “Change…”.";

/// Remediation text for a destination inside an app sandbox container
pub fn sandbox_remediation(destination: &Path) -> String {
    format!(
        "Destination is inside the app’s sandbox:\n\
         {}\n\
         \n\
         Please click “Change…” and select a real location like:\n\
         • ~/Applications   (your user Applications)\n\
         • /Users/Shared    (visible to all users)\n\
         \n\
         Tip: Use “Go to Folder…” in the panel and paste one of the paths above.",
        destination.display()
    )
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("Please pick a folder first.")]
    MissingSource,

    #[error("Please enter an app name.")]
    BlankName,

    #[error("{}", sandbox_remediation(.destination))]
    SandboxedDestination { destination: PathBuf },

    #[error(
        "osacompile failed\nexit code: {exit_code}\nstderr:\n{stderr}\n\n{tip}",
        tip = COMPILE_TIP
    )]
    CompileFailed { exit_code: i32, stderr: String },

    #[error("Failed to move compiled app to destination: {source}")]
    CopyFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("Error: could not launch {program}: {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: {context}: {source}")]
    Io {
        stage: Stage,
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CreateError {
    /// The stage at which the attempt halted
    pub fn stage(&self) -> Stage {
        match self {
            CreateError::MissingSource
            | CreateError::BlankName
            | CreateError::SandboxedDestination { .. } => Stage::Validating,
            CreateError::CompileFailed { .. } | CreateError::ToolLaunch { .. } => Stage::Compiling,
            CreateError::CopyFailed { .. } => Stage::Finishing,
            CreateError::Io { stage, .. } => *stage,
        }
    }

    /// Input errors are reported inline without touching the filesystem
    pub fn is_input_error(&self) -> bool {
        self.stage() == Stage::Validating
    }
}
