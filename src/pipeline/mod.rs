//! Ordered external-tool steps
//!
//! Each [`Step`] is tagged fatal or best-effort. [`run_steps`] executes them in
//! order and stops at the first fatal step that fails; best-effort failures
//! are recorded and skipped over.

use std::io;

use serde::Serialize;
use tracing::{debug, warn};

use crate::tools::{Invocation, ToolOutput, ToolRunner};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPolicy {
    /// Failure ends the run
    Fatal,
    /// Failure is recorded and the run continues
    BestEffort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub invocation: Invocation,
    pub policy: StepPolicy,
}

impl Step {
    pub fn fatal(label: &'static str, invocation: Invocation) -> Self {
        Self {
            label,
            invocation,
            policy: StepPolicy::Fatal,
        }
    }

    pub fn best_effort(label: &'static str, invocation: Invocation) -> Self {
        Self {
            label,
            invocation,
            policy: StepPolicy::BestEffort,
        }
    }
}

#[derive(Debug)]
pub enum StepOutcome {
    /// The tool ran; it may still have exited non-zero
    Exited(ToolOutput),
    /// The tool could not be started
    LaunchFailed(io::Error),
}

/// What happened when one step ran
#[derive(Debug)]
pub struct StepRecord {
    pub label: &'static str,
    pub program: String,
    pub outcome: StepOutcome,
}

impl StepRecord {
    pub fn succeeded(&self) -> bool {
        matches!(&self.outcome, StepOutcome::Exited(out) if out.success())
    }

    /// Captured stdout + stderr; empty when the tool never started
    pub fn output_text(&self) -> String {
        match &self.outcome {
            StepOutcome::Exited(out) => out.combined(),
            StepOutcome::LaunchFailed(_) => String::new(),
        }
    }

    /// One line describing a failure, `None` on success
    pub fn failure_summary(&self) -> Option<String> {
        match &self.outcome {
            StepOutcome::Exited(out) if out.success() => None,
            StepOutcome::Exited(out) => {
                let stderr = out.stderr.trim();
                if stderr.is_empty() {
                    Some(format!("{} ({}) exited with {}", self.label, self.program, out.exit_code))
                } else {
                    Some(format!(
                        "{} ({}) exited with {}: {}",
                        self.label, self.program, out.exit_code, stderr
                    ))
                }
            }
            StepOutcome::LaunchFailed(e) => {
                Some(format!("{} ({}) could not be launched: {}", self.label, self.program, e))
            }
        }
    }
}

/// A fatal step failed; the steps before it are kept for reporting
#[derive(Debug)]
pub struct StepFailure {
    pub completed: Vec<StepRecord>,
    pub failed: StepRecord,
}

impl StepFailure {
    /// All records in execution order, the failed one last
    pub fn into_records(self) -> Vec<StepRecord> {
        let mut records = self.completed;
        records.push(self.failed);
        records
    }
}

/// Run `steps` in order, halting on the first failed fatal step
pub fn run_steps(runner: &dyn ToolRunner, steps: &[Step]) -> Result<Vec<StepRecord>, StepFailure> {
    let mut completed = Vec::with_capacity(steps.len());

    for step in steps {
        let record = run_step(runner, step);

        if !record.succeeded() {
            match step.policy {
                StepPolicy::Fatal => {
                    return Err(StepFailure {
                        completed,
                        failed: record,
                    });
                }
                StepPolicy::BestEffort => {
                    if let Some(summary) = record.failure_summary() {
                        warn!("[termhere] Ignoring failed step: {}", summary);
                    }
                }
            }
        }

        completed.push(record);
    }

    Ok(completed)
}

/// Run a single step regardless of policy
pub fn run_step(runner: &dyn ToolRunner, step: &Step) -> StepRecord {
    debug!(
        "[termhere] step '{}' ({:?}): {}",
        step.label,
        step.policy,
        step.invocation.command_line()
    );

    let outcome = match runner.run(&step.invocation) {
        Ok(output) => StepOutcome::Exited(output),
        Err(e) => StepOutcome::LaunchFailed(e),
    };

    StepRecord {
        label: step.label,
        program: step.invocation.program_name(),
        outcome,
    }
}
