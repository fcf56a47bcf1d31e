//! AppleScript source for the generated helper
//!
//! The helper does not use Apple Events. When run (or when something is
//! dropped on it) it writes a one-off `.command` file under `/tmp` that
//! changes into the baked-in folder and execs a login shell, marks it
//! executable, and hands it to Terminal through `open -a`.

mod escape;


use std::path::Path;

pub use escape::escape_applescript_literal;

/// Routine both entry handlers delegate to
pub const HELPER_ROUTINE: &str = "openTerminalAt";

/// Inputs for one generated script
#[derive(Debug, Clone, Copy)]
pub struct LauncherScript<'a> {
    pub target: &'a Path,
    pub terminal_app: &'a str,
    pub shell: &'a str,
}

impl<'a> LauncherScript<'a> {
    pub fn new(target: &'a Path, terminal_app: &'a str, shell: &'a str) -> Self {
        Self {
            target,
            terminal_app,
            shell,
        }
    }

    pub fn render(&self) -> String {
        let target = escape_applescript_literal(&self.target.to_string_lossy());
        let terminal = escape_applescript_literal(self.terminal_app);
        let shell = escape_applescript_literal(self.shell);
        let routine = HELPER_ROUTINE;

        format!(
            r##"-- Generated by termhere (no Apple Events)
on open theItems
  set targetPOSIX to "{target}"
  my {routine}(targetPOSIX)
end open

on run
  set targetPOSIX to "{target}"
  my {routine}(targetPOSIX)
end run

on {routine}(targetPOSIX)
  set scriptPath to "/tmp/open-term-" & (do shell script "uuidgen") & ".command"
  set fileText to "#!{shell}" & linefeed & "cd " & quoted form of targetPOSIX & linefeed & "exec {shell} -l" & linefeed
  do shell script "/bin/echo " & quoted form of fileText & " > " & quoted form of scriptPath
  do shell script "/bin/chmod +x " & quoted form of scriptPath
  do shell script "/usr/bin/open -a " & quoted form of "{terminal}" & " " & quoted form of scriptPath
end {routine}
"##
        )
    }
}
