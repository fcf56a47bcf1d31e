use std::path::PathBuf;

use serde::Serialize;

/// First-launch guidance appended to every successful status
pub const OPEN_ANYWAY_HINT: &str = "If Finder blocks the app the first time, click “Open Privacy & Security”, then press **Open Anyway** for this app. After that, launches will work normally. You can also Right‑click → Open → Open once.";

/// Outcome of a successful create attempt
#[derive(Debug, Clone, Serialize)]
pub struct CreateReport {
    /// Final `<destination>/<name>.app`
    pub bundle_path: PathBuf,
    /// Combined spctl stdout + stderr (empty if it could not run)
    pub assessment: String,
    /// Combined `codesign -dv` stdout + stderr (empty if it could not run)
    pub signature: String,
    /// Failed best-effort finishing steps; only filled when reporting is enabled
    pub warnings: Vec<String>,
}

impl CreateReport {
    /// Human-readable status log shown to the user
    pub fn status_text(&self) -> String {
        let mut text = format!(
            "Created: {}\n\n{}\n\nspctl:\n{}\n\ncodesign -dv:\n{}",
            self.bundle_path.display(),
            OPEN_ANYWAY_HINT,
            self.assessment,
            self.signature,
        );

        if !self.warnings.is_empty() {
            text.push_str("\n\nWarnings:");
            for warning in &self.warnings {
                text.push_str("\n• ");
                text.push_str(warning);
            }
        }

        text
    }
}
