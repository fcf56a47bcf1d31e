//! Form input and the validated request derived from it

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::CreateError;

/// Raw interaction state: what the user has picked and typed so far
#[derive(Debug, Clone, Default)]
pub struct HelperForm {
    /// Folder the helper should open; required
    pub source: Option<PathBuf>,
    /// Helper display name, also the bundle file name
    pub name: String,
    /// Folder the bundle is written into
    pub destination: PathBuf,
}

impl HelperForm {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            source: None,
            name: String::new(),
            destination: destination.into(),
        }
    }

    /// Record a picked source folder, filling in a suggested name when the
    /// name field is still blank
    pub fn pick_source(&mut self, source: PathBuf, name_prefix: &str) {
        if self.name.trim().is_empty() {
            self.name = suggest_helper_name(name_prefix, &source);
        }
        self.source = Some(source);
    }

    /// Whether the create action should be offered at all
    pub fn can_create(&self) -> bool {
        self.source.is_some() && !trimmed_name(&self.name).is_empty()
    }

    pub fn destination_is_sandboxed(&self, marker: &str) -> bool {
        is_sandboxed(&self.destination, marker)
    }

    /// Validate into a request: source first, then name, then destination
    pub fn to_request(&self, sandbox_marker: &str) -> Result<HelperRequest, CreateError> {
        let source = self.source.clone().ok_or(CreateError::MissingSource)?;

        let name = trimmed_name(&self.name);
        if name.is_empty() {
            return Err(CreateError::BlankName);
        }

        if is_sandboxed(&self.destination, sandbox_marker) {
            return Err(CreateError::SandboxedDestination {
                destination: self.destination.clone(),
            });
        }

        Ok(HelperRequest {
            source,
            name: name.to_string(),
            destination: self.destination.clone(),
        })
    }
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelperRequest {
    pub source: PathBuf,
    pub name: String,
    pub destination: PathBuf,
}

impl HelperRequest {
    /// `<destination>/<name>.app`
    pub fn bundle_path(&self) -> PathBuf {
        self.destination.join(format!("{}.app", self.name))
    }
}

/// Default helper name for a source folder: prefix + last path component
pub fn suggest_helper_name(prefix: &str, source: &Path) -> String {
    let last = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    format!("{}{}", prefix, last)
}

fn trimmed_name(name: &str) -> &str {
    name.trim()
}

fn is_sandboxed(destination: &Path, marker: &str) -> bool {
    !marker.is_empty() && destination.to_string_lossy().contains(marker)
}
