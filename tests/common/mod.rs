//! Shared test utilities for pipeline integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use termhere::HelperForm;
use termhere::config::Config;
use termhere::tools::{Invocation, ToolOutput, ToolRunner};

/// Fake tool runner.
///
/// Records every invocation. `osacompile` with exit code 0 writes a bundle
/// skeleton at its `-o` path, like the real compiler would.
#[derive(Default)]
pub struct ScriptedRunner {
    calls: RefCell<Vec<Invocation>>,
    scripts: RefCell<Vec<String>>,
    results: HashMap<String, ToolOutput>,
    missing: Vec<String>,
    skip_bundle: bool,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with `exit_code` and `stderr`
    pub fn exit_with(mut self, program: &str, exit_code: i32, stderr: &str) -> Self {
        self.results.insert(
            program.to_string(),
            ToolOutput {
                exit_code,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Make `program` succeed and print `stdout` + `stderr`
    pub fn output(mut self, program: &str, stdout: &str, stderr: &str) -> Self {
        self.results.insert(
            program.to_string(),
            ToolOutput {
                exit_code: 0,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Make `program` fail to launch
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// `osacompile` reports success but writes nothing
    pub fn compile_without_output(mut self) -> Self {
        self.skip_bundle = true;
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(Invocation::program_name).collect()
    }

    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program_name() == program)
            .cloned()
            .collect()
    }

    /// Script sources seen by osacompile, in order
    pub fn compiled_scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }
}

impl ToolRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        let program = invocation.program_name();

        if self.missing.contains(&program) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            ));
        }

        let result = self.results.get(&program).cloned().unwrap_or_default();

        if program == "osacompile" {
            let args: Vec<PathBuf> = invocation.args.iter().map(PathBuf::from).collect();
            if let Some(script) = args.last() {
                self.scripts
                    .borrow_mut()
                    .push(fs::read_to_string(script).unwrap_or_default());
            }
            if result.success() && !self.skip_bundle {
                let out = args
                    .iter()
                    .position(|a| a.as_os_str() == "-o")
                    .and_then(|i| args.get(i + 1))
                    .expect("osacompile called without -o");
                write_bundle_skeleton(out);
            }
        }

        Ok(result)
    }
}

/// Minimal applet layout
pub fn write_bundle_skeleton(bundle: &Path) {
    let macos = bundle.join("Contents").join("MacOS");
    fs::create_dir_all(&macos).expect("Failed to create bundle");
    fs::write(macos.join("applet"), "#!/bin/sh\n").expect("Failed to write applet");
    fs::write(bundle.join("Contents").join("Info.plist"), "<plist/>\n")
        .expect("Failed to write Info.plist");
}

/// Scratch folders for one create run
pub struct Workspace {
    pub root: TempDir,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub temp: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let source = root.path().join("code").join("widgets");
        let destination = root.path().join("Applications");
        let temp = root.path().join("tmp");
        fs::create_dir_all(&source).expect("Failed to create source");
        fs::create_dir_all(&temp).expect("Failed to create temp");
        Self {
            root,
            source,
            destination,
            temp,
        }
    }

    pub fn form(&self, name: &str) -> HelperForm {
        let mut form = HelperForm::new(&self.destination);
        form.name = name.to_string();
        form.pick_source(self.source.clone(), &Config::with_defaults().helper.name_prefix);
        form
    }

    /// Entries left in the scratch temp directory
    pub fn temp_entries(&self) -> Vec<PathBuf> {
        fs::read_dir(&self.temp)
            .expect("Failed to read temp dir")
            .map(|e| e.expect("Failed to read entry").path())
            .collect()
    }
}
