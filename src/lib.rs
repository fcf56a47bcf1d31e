//! termhere - make "Open Terminal at …" helper apps
//!
//! termhere generates a small AppleScript applet for a chosen folder. Launching
//! the applet (or dropping files onto it) opens a login shell in Terminal at
//! that folder.
//!
//! ## Pipeline
//!
//! 1. **Validate**: source folder picked, name non-blank, destination outside
//!    an app sandbox container
//! 2. **Compile**: render the launcher script and run `osacompile`
//! 3. **Finish**: move the bundle into place, ad-hoc sign it, clear quarantine
//! 4. **Report**: Gatekeeper assessment and signature details for the user
//!
//! All external utilities run through [`tools::ToolRunner`].

pub mod builder;
pub mod config;
pub mod domain;
pub mod gui;
pub mod pipeline;
pub mod platform;
pub mod script;
pub mod tools;

pub use domain::*;
