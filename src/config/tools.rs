//! Absolute paths of the OS utilities the pipeline invokes

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPaths {
    #[serde(default = "default_osacompile")]
    pub osacompile: PathBuf,

    #[serde(default = "default_codesign")]
    pub codesign: PathBuf,

    #[serde(default = "default_xattr")]
    pub xattr: PathBuf,

    #[serde(default = "default_chmod")]
    pub chmod: PathBuf,

    #[serde(default = "default_spctl")]
    pub spctl: PathBuf,

    /// Used for revealing in Finder and opening System Settings
    #[serde(default = "default_open")]
    pub open: PathBuf,
}

fn default_osacompile() -> PathBuf {
    PathBuf::from("/usr/bin/osacompile")
}

fn default_codesign() -> PathBuf {
    PathBuf::from("/usr/bin/codesign")
}

fn default_xattr() -> PathBuf {
    PathBuf::from("/usr/bin/xattr")
}

fn default_chmod() -> PathBuf {
    PathBuf::from("/bin/chmod")
}

fn default_spctl() -> PathBuf {
    PathBuf::from("/usr/sbin/spctl")
}

fn default_open() -> PathBuf {
    PathBuf::from("/usr/bin/open")
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            osacompile: default_osacompile(),
            codesign: default_codesign(),
            xattr: default_xattr(),
            chmod: default_chmod(),
            spctl: default_spctl(),
            open: default_open(),
        }
    }
}
