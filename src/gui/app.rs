//! Window state and the actions behind each button
//!
//! The window only owns a [`HelperForm`] and the status text. Creating a
//! helper hands the form to [`HelperBuilder`] and shows whatever comes back.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::builder::HelperBuilder;
use crate::config::Config;
use crate::domain::{HelperForm, Stage};
use crate::platform;
use crate::tools::{SystemRunner, ToolRunner};

pub const INITIAL_STATUS: &str = "Pick a folder, name the helper, then Create.";

/// How the status text is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    /// Missing input or a sandboxed destination; nothing was attempted
    Notice,
    Error,
}

pub struct LauncherApp {
    pub(crate) config: Config,
    pub(crate) form: HelperForm,
    pub(crate) status: String,
    pub(crate) status_tone: StatusTone,
    /// Stage the last attempt stopped at; `Idle` after success
    pub(crate) last_stage: Option<Stage>,
    runner: Box<dyn ToolRunner>,
}

impl LauncherApp {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, Box::new(SystemRunner))
    }

    pub fn with_runner(config: Config, runner: Box<dyn ToolRunner>) -> Self {
        let form = HelperForm::new(config.initial_destination());
        Self {
            config,
            form,
            status: INITIAL_STATUS.to_string(),
            status_tone: StatusTone::Normal,
            last_stage: None,
            runner,
        }
    }

    pub(crate) fn destination_is_sandboxed(&self) -> bool {
        self.form
            .destination_is_sandboxed(&self.config.helper.sandbox_marker)
    }

    pub(crate) fn pick_folder(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Choose a folder to open in Terminal")
            .set_directory(platform::user_home())
            .pick_folder()
        {
            self.set_source(path);
        }
    }

    pub(crate) fn set_source(&mut self, path: PathBuf) {
        self.form.pick_source(path, &self.config.helper.name_prefix);
    }

    pub(crate) fn pick_destination(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Choose where to save the helper app")
            .set_directory(&self.form.destination)
            .set_can_create_directories(true)
            .pick_folder()
        {
            self.form.destination = path;
        }
    }

    /// Switch to one of the quick destinations, creating it if needed
    pub(crate) fn use_destination(&mut self, path: PathBuf) {
        platform::ensure_dir(&path);
        self.form.destination = path;
    }

    pub(crate) fn create_helper(&mut self) {
        let builder = HelperBuilder::new(&self.config, self.runner.as_ref());

        match builder.create(&self.form) {
            Ok(report) => {
                self.status = report.status_text();
                self.status_tone = StatusTone::Normal;
                self.last_stage = Some(Stage::Idle);
            }
            Err(e) if e.is_input_error() => {
                info!("[termhere] Create not attempted: {}", e);
                self.last_stage = Some(e.stage());
                self.status = e.to_string();
                self.status_tone = StatusTone::Notice;
            }
            Err(e) => {
                warn!("[termhere] Create stopped while {}: {}", e.stage(), e);
                self.last_stage = Some(e.stage());
                self.status = e.to_string();
                self.status_tone = StatusTone::Error;
            }
        }
    }

    /// Reveal the configured destination, whether or not a bundle is there yet
    pub(crate) fn reveal_destination(&mut self) {
        platform::reveal(self.runner.as_ref(), &self.config.tools, &self.form.destination);
    }

    pub(crate) fn open_privacy_security(&mut self) {
        if platform::open_privacy_security(self.runner.as_ref(), &self.config.tools).is_none() {
            info!("[termhere] Could not open Privacy & Security");
        }
    }
}
