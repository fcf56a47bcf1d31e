//! Create a helper bundle from a validated form
//!
//! A create attempt:
//! 1. Validates the form (source, name, sandbox marker)
//! 2. Writes the AppleScript and compiles it with `osacompile` into the temp dir
//! 3. Moves the bundle into place, overwriting any previous one
//! 4. Ad-hoc signs it, clears quarantine and marks the applet executable
//! 5. Collects spctl / codesign output and reveals the bundle
//!
//! Steps 2 and 3 are fatal. Everything after the move is best-effort.

mod fs_ops;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::config::Config;
use crate::domain::{CreateError, CreateReport, HelperForm, HelperRequest, Stage};
use crate::pipeline::{Step, StepFailure, StepOutcome, StepPolicy, StepRecord, run_steps};
use crate::platform;
use crate::script::LauncherScript;
use crate::tools::{Invocation, ToolRunner};

pub use fs_ops::{TempArtifacts, copy_dir_recursive, replace_bundle};

/// Extended attribute macOS sets on downloaded files
pub const QUARANTINE_ATTR: &str = "com.apple.quarantine";

/// Entry-point executable inside an osacompile applet
pub const APPLET_EXECUTABLE: &str = "Contents/MacOS/applet";

/// Everything one create attempt will do, in order
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub request: HelperRequest,
    pub script_path: PathBuf,
    pub temp_bundle: PathBuf,
    pub compile: Step,
    pub finishing: Vec<Step>,
    pub verification: Vec<Step>,
    pub reveal: Option<Step>,
}

impl BuildPlan {
    /// Human-readable listing used by `--dry-run`
    pub fn describe(&self) -> String {
        let bundle = self.request.bundle_path();
        let mut lines = vec![
            format!("write script      {}", self.script_path.display()),
            describe_step(&self.compile),
            format!("create directory  {}", self.request.destination.display()),
            format!(
                "replace bundle    {} <- {}",
                bundle.display(),
                self.temp_bundle.display()
            ),
        ];
        lines.extend(self.finishing.iter().map(describe_step));
        lines.extend(self.verification.iter().map(describe_step));
        lines.extend(self.reveal.iter().map(describe_step));
        lines.join("\n")
    }
}

fn describe_step(step: &Step) -> String {
    let tag = match step.policy {
        StepPolicy::Fatal => "[fatal]      ",
        StepPolicy::BestEffort => "[best-effort]",
    };
    format!("{} {}", tag, step.invocation.command_line())
}

pub struct HelperBuilder<'a> {
    config: &'a Config,
    runner: &'a dyn ToolRunner,
    temp_dir: PathBuf,
}

impl<'a> HelperBuilder<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn ToolRunner) -> Self {
        Self {
            config,
            runner,
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Use `temp_dir` instead of the system temp directory
    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    pub fn validate(&self, form: &HelperForm) -> Result<HelperRequest, CreateError> {
        debug!("[termhere] stage: {}", Stage::Validating);
        form.to_request(&self.config.helper.sandbox_marker)
    }

    /// AppleScript source for a helper that opens `source`
    pub fn script_for(&self, source: &Path) -> String {
        let helper = &self.config.helper;
        LauncherScript::new(source, &helper.terminal_app, &helper.shell).render()
    }

    pub fn plan(&self, request: &HelperRequest, artifacts: &TempArtifacts) -> BuildPlan {
        let tools = &self.config.tools;
        let settings = &self.config.settings;
        let bundle = request.bundle_path();

        let compile = Step::fatal(
            "compile",
            Invocation::new(&tools.osacompile)
                .arg("-o")
                .arg(&artifacts.bundle)
                .arg(&artifacts.script),
        );

        let finishing = vec![
            Step::best_effort(
                "ad-hoc sign",
                Invocation::new(&tools.codesign)
                    .args(["--force", "--deep", "-s", "-", "--options=runtime"])
                    .arg(&bundle),
            ),
            Step::best_effort(
                "clear quarantine",
                Invocation::new(&tools.xattr)
                    .args(["-dr", QUARANTINE_ATTR])
                    .arg(&bundle),
            ),
            Step::best_effort(
                "mark executable",
                Invocation::new(&tools.chmod)
                    .arg("+x")
                    .arg(bundle.join(APPLET_EXECUTABLE)),
            ),
        ];

        let verification = if settings.verify_after_create {
            vec![
                Step::best_effort(
                    "assess",
                    Invocation::new(&tools.spctl)
                        .args(["--assess", "--type", "execute", "--verbose=4"])
                        .arg(&bundle),
                ),
                Step::best_effort(
                    "inspect signature",
                    Invocation::new(&tools.codesign)
                        .args(["-dv", "--verbose=4"])
                        .arg(&bundle),
                ),
            ]
        } else {
            Vec::new()
        };

        let reveal = settings
            .reveal_after_create
            .then(|| Step::best_effort("reveal", platform::reveal_invocation(tools, &bundle)));

        BuildPlan {
            request: request.clone(),
            script_path: artifacts.script.clone(),
            temp_bundle: artifacts.bundle.clone(),
            compile,
            finishing,
            verification,
            reveal,
        }
    }

    /// Validate and plan without touching the filesystem or running anything
    pub fn dry_run(&self, form: &HelperForm) -> Result<BuildPlan, CreateError> {
        let request = self.validate(form)?;
        let artifacts = TempArtifacts::allocate(&self.temp_dir, &request.name);
        Ok(self.plan(&request, &artifacts))
    }

    /// Run the whole pipeline
    pub fn create(&self, form: &HelperForm) -> Result<CreateReport, CreateError> {
        let request = self.validate(form)?;
        let _span = info_span!("create", name = %request.name).entered();

        let artifacts = TempArtifacts::allocate(&self.temp_dir, &request.name);
        let plan = self.plan(&request, &artifacts);
        let bundle_path = request.bundle_path();

        debug!("[termhere] stage: {}", Stage::Compiling);
        fs_ops::remove_path(&artifacts.bundle);
        fs::write(&artifacts.script, self.script_for(&request.source)).map_err(|source| {
            CreateError::Io {
                stage: Stage::Compiling,
                context: format!("failed to write {}", artifacts.script.display()),
                source,
            }
        })?;

        if let Err(failure) = run_steps(self.runner, std::slice::from_ref(&plan.compile)) {
            return Err(compile_error(failure.failed));
        }
        artifacts.remove_script();

        debug!("[termhere] stage: {}", Stage::Finishing);
        fs::create_dir_all(&request.destination).map_err(|source| CreateError::Io {
            stage: Stage::Finishing,
            context: format!("failed to create {}", request.destination.display()),
            source,
        })?;

        replace_bundle(&artifacts.bundle, &bundle_path)
            .map_err(|source| CreateError::CopyFailed { source })?;

        let finishing =
            run_steps(self.runner, &plan.finishing).unwrap_or_else(StepFailure::into_records);

        debug!("[termhere] stage: {}", Stage::Reporting);
        let verification =
            run_steps(self.runner, &plan.verification).unwrap_or_else(StepFailure::into_records);

        let warnings = if self.config.settings.report_finishing_failures {
            finishing.iter().filter_map(StepRecord::failure_summary).collect()
        } else {
            Vec::new()
        };

        if let Some(reveal) = &plan.reveal {
            // Best-effort; failures are logged by the step runner
            let _ = run_steps(self.runner, std::slice::from_ref(reveal));
        }

        info!("[termhere] Created {}", bundle_path.display());
        debug!("[termhere] stage: {}", Stage::Idle);

        Ok(CreateReport {
            bundle_path,
            assessment: output_of(&verification, 0),
            signature: output_of(&verification, 1),
            warnings,
        })
    }
}

fn output_of(records: &[StepRecord], index: usize) -> String {
    records
        .get(index)
        .map(StepRecord::output_text)
        .unwrap_or_default()
}

fn compile_error(record: StepRecord) -> CreateError {
    match record.outcome {
        StepOutcome::Exited(output) => CreateError::CompileFailed {
            exit_code: output.exit_code,
            stderr: output.stderr,
        },
        StepOutcome::LaunchFailed(source) => CreateError::ToolLaunch {
            program: record.program,
            source,
        },
    }
}
