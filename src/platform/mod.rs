//! Finder, System Settings and well-known user folders

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::ToolPaths;
use crate::pipeline::{Step, StepRecord, run_step};
use crate::tools::{Invocation, ToolRunner};

/// Security pane URLs, most specific first
pub const PRIVACY_PANE_URLS: [&str; 3] = [
    "x-apple.systempreferences:com.apple.preference.security?General",
    "x-apple.systempreferences:com.apple.preference.security",
    "x-apple.systempreferences:",
];

/// Opened when none of the pane URLs work
pub const SYSTEM_SETTINGS_APP: &str = "/System/Applications/System Settings.app";

/// Shared folder visible to every user on the machine
pub const SHARED_USERS_DIR: &str = "/Users/Shared";

pub fn user_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// `~/Downloads`, falling back to the literal path under the home directory
pub fn default_destination() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| user_home().join("Downloads"))
}

/// One-click destinations offered when the current one is inside a sandbox
pub fn quick_destinations() -> Vec<(&'static str, PathBuf)> {
    vec![
        ("Use ~/Downloads", default_destination()),
        ("Use ~/Applications", user_home().join("Applications")),
        ("Use /Users/Shared", PathBuf::from(SHARED_USERS_DIR)),
    ]
}

pub fn reveal_invocation(tools: &ToolPaths, path: &Path) -> Invocation {
    Invocation::new(&tools.open).arg("-R").arg(path)
}

/// Select `path` in Finder. The path is used as given, whether or not it exists.
pub fn reveal(runner: &dyn ToolRunner, tools: &ToolPaths, path: &Path) -> StepRecord {
    let record = run_step(runner, &Step::best_effort("reveal", reveal_invocation(tools, path)));
    if let Some(summary) = record.failure_summary() {
        warn!("[termhere] {}", summary);
    }
    record
}

/// Open System Settings at Privacy & Security.
///
/// Returns the URL or app path that opened, `None` when every attempt failed.
pub fn open_privacy_security(runner: &dyn ToolRunner, tools: &ToolPaths) -> Option<String> {
    for url in PRIVACY_PANE_URLS {
        let step = Step::best_effort("open settings pane", Invocation::new(&tools.open).arg(url));
        if run_step(runner, &step).succeeded() {
            info!("[termhere] Opened {}", url);
            return Some(url.to_string());
        }
    }

    let step = Step::best_effort(
        "open System Settings",
        Invocation::new(&tools.open).arg("-a").arg(SYSTEM_SETTINGS_APP),
    );
    let record = run_step(runner, &step);
    if record.succeeded() {
        Some(SYSTEM_SETTINGS_APP.to_string())
    } else {
        if let Some(summary) = record.failure_summary() {
            warn!("[termhere] {}", summary);
        }
        None
    }
}

/// Create a quick destination folder; errors are ignored
pub fn ensure_dir(path: &Path) {
    if let Err(e) = std::fs::create_dir_all(path) {
        warn!("[termhere] Could not create {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolOutput;
    use std::cell::RefCell;
    use std::ffi::OsString;
    use std::io;

    /// Fails every `open` whose first argument is a URL
    #[derive(Default)]
    struct NoUrlHandler {
        calls: RefCell<Vec<Invocation>>,
    }

    impl ToolRunner for NoUrlHandler {
        fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
            self.calls.borrow_mut().push(invocation.clone());
            let is_url = invocation
                .args
                .first()
                .is_some_and(|a| a.to_string_lossy().starts_with("x-apple"));
            Ok(ToolOutput {
                exit_code: if is_url { 1 } else { 0 },
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_reveal_invocation_uses_open_r() {
        let inv = reveal_invocation(&ToolPaths::default(), Path::new("/Users/Shared/x.app"));
        assert_eq!(inv.program, PathBuf::from("/usr/bin/open"));
        assert_eq!(
            inv.args,
            vec![OsString::from("-R"), OsString::from("/Users/Shared/x.app")]
        );
    }

    #[test]
    fn test_privacy_pane_falls_back_to_settings_app() {
        let runner = NoUrlHandler::default();
        let opened = open_privacy_security(&runner, &ToolPaths::default());

        assert_eq!(opened.as_deref(), Some(SYSTEM_SETTINGS_APP));
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), PRIVACY_PANE_URLS.len() + 1);
        for (call, url) in calls.iter().zip(PRIVACY_PANE_URLS) {
            assert_eq!(call.args, vec![OsString::from(url)]);
        }
    }

    #[test]
    fn test_quick_destinations_include_shared() {
        let quick = quick_destinations();
        assert_eq!(quick.len(), 3);
        assert_eq!(quick[2], ("Use /Users/Shared", PathBuf::from("/Users/Shared")));
    }
}
