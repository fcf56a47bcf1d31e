//! External tool invocation
//!
//! Every OS utility the pipeline touches goes through [`ToolRunner`], so the
//! orchestration can be exercised without `osacompile` and friends present.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::debug;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Short name for messages, e.g. `codesign` for `/usr/bin/codesign`
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }

    /// Shell-like rendering for logs and dry runs; arguments with spaces are
    /// single-quoted
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push('\'');
                line.push_str(&arg.replace('\'', "'\\''"));
                line.push('\'');
            } else {
                line.push_str(&arg);
            }
        }
        line
    }
}

/// Captured result of one finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    /// Exit code; -1 when the process was killed by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// stdout followed directly by stderr
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs an invocation to completion
pub trait ToolRunner {
    /// Block until the child exits. `Err` means it could not be launched.
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput>;
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
        (**self).run(invocation)
    }
}

/// Runs tools as real child processes, no timeout
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
        debug!("[termhere] Running: {}", invocation.command_line());

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()?;

        Ok(ToolOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_quotes_spaced_args() {
        let inv = Invocation::new("/usr/bin/osacompile")
            .arg("-o")
            .arg("/tmp/Open Terminal at x.app")
            .arg("it's");
        assert_eq!(
            inv.command_line(),
            "/usr/bin/osacompile -o '/tmp/Open Terminal at x.app' it's"
        );
        assert_eq!(inv.program_name(), "osacompile");
    }

    #[test]
    fn test_combined_output() {
        let out = ToolOutput {
            exit_code: 3,
            stdout: "a\n".to_string(),
            stderr: "b\n".to_string(),
        };
        assert!(!out.success());
        assert_eq!(out.combined(), "a\nb\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_exit_and_streams() {
        let inv = Invocation::new("/bin/sh")
            .arg("-c")
            .arg("printf out; printf err >&2; exit 4");
        let out = SystemRunner.run(&inv).expect("sh should launch");
        assert_eq!(out.exit_code, 4);
        assert_eq!(out.stdout, "out");
        assert_eq!(out.stderr, "err");
    }

    #[test]
    fn test_system_runner_launch_failure() {
        let inv = Invocation::new("/definitely/not/a/real/tool");
        assert!(SystemRunner.run(&inv).is_err());
    }
}
