use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Returns a fixed exit code per program name; unknown programs fail to launch
struct CannedRunner {
    exit_codes: HashMap<&'static str, i32>,
    calls: RefCell<Vec<String>>,
}

impl CannedRunner {
    fn new(exit_codes: &[(&'static str, i32)]) -> Self {
        Self {
            exit_codes: exit_codes.iter().copied().collect(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ToolRunner for CannedRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
        let name = invocation.program_name();
        self.calls.borrow_mut().push(name.clone());
        match self.exit_codes.get(name.as_str()) {
            Some(&code) => Ok(ToolOutput {
                exit_code: code,
                stdout: format!("{} out\n", name),
                stderr: if code == 0 { String::new() } else { "boom".to_string() },
            }),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such tool")),
        }
    }
}

fn step(policy: StepPolicy, program: &'static str) -> Step {
    Step {
        label: program,
        invocation: Invocation::new(format!("/usr/bin/{}", program)),
        policy,
    }
}

#[test]
fn test_all_steps_run_in_order() {
    let runner = CannedRunner::new(&[("a", 0), ("b", 0), ("c", 0)]);
    let steps = [
        step(StepPolicy::Fatal, "a"),
        step(StepPolicy::BestEffort, "b"),
        step(StepPolicy::Fatal, "c"),
    ];

    let records = run_steps(&runner, &steps).expect("no failures");
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(StepRecord::succeeded));
    assert_eq!(*runner.calls.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn test_fatal_failure_halts() {
    let runner = CannedRunner::new(&[("a", 0), ("b", 1), ("c", 0)]);
    let steps = [
        step(StepPolicy::Fatal, "a"),
        step(StepPolicy::Fatal, "b"),
        step(StepPolicy::Fatal, "c"),
    ];

    let failure = run_steps(&runner, &steps).expect_err("b is fatal");
    assert_eq!(failure.completed.len(), 1);
    assert_eq!(failure.failed.label, "b");
    assert_eq!(*runner.calls.borrow(), vec!["a", "b"]);
    assert_eq!(failure.into_records().len(), 2);
}

#[test]
fn test_best_effort_failures_continue() {
    let runner = CannedRunner::new(&[("a", 2), ("c", 0)]);
    let steps = [
        step(StepPolicy::BestEffort, "a"),
        step(StepPolicy::BestEffort, "missing"),
        step(StepPolicy::Fatal, "c"),
    ];

    let records = run_steps(&runner, &steps).expect("only best-effort steps failed");
    assert_eq!(records.len(), 3);
    assert!(!records[0].succeeded());
    assert!(matches!(records[1].outcome, StepOutcome::LaunchFailed(_)));
    assert!(records[2].succeeded());
}

#[test]
fn test_fatal_launch_failure_halts() {
    let runner = CannedRunner::new(&[("c", 0)]);
    let steps = [step(StepPolicy::Fatal, "missing"), step(StepPolicy::Fatal, "c")];

    let failure = run_steps(&runner, &steps).expect_err("launch failure is fatal");
    assert!(matches!(failure.failed.outcome, StepOutcome::LaunchFailed(_)));
    assert_eq!(*runner.calls.borrow(), vec!["missing"]);
}

#[test]
fn test_output_text_and_summaries() {
    let runner = CannedRunner::new(&[("a", 0), ("b", 5)]);
    let ok = run_step(&runner, &step(StepPolicy::BestEffort, "a"));
    let bad = run_step(&runner, &step(StepPolicy::BestEffort, "b"));
    let missing = run_step(&runner, &step(StepPolicy::BestEffort, "gone"));

    assert_eq!(ok.output_text(), "a out\n");
    assert_eq!(ok.failure_summary(), None);
    assert_eq!(bad.output_text(), "b out\nboom");
    assert_eq!(bad.failure_summary().unwrap(), "b (b) exited with 5: boom");
    assert_eq!(missing.output_text(), "");
    assert!(missing.failure_summary().unwrap().contains("could not be launched"));
}
