// SPDX-License-Identifier: GPL-3.0-or-later
// src/platform/mac.rs
//
// macOS host: AppleScript through osascript.

use std::ffi::OsStr;
use std::path::Path;

use super::{
    ActivePresentation, HostError, PresentationHost, parse_presentation, parse_reply, run_bridge,
};
use crate::constant::{STATUS_NO_PRESENTATION, STATUS_NOT_RUNNING, STATUS_OK};

const OSASCRIPT: &str = "osascript";

/// Drives the presentation application through `osascript`.
#[derive(Debug, Clone)]
pub struct AppleScriptHost {
    app_name: String,
}

impl AppleScriptHost {
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }

    fn run(&self, body: &str, argv: &[&OsStr]) -> Result<Vec<String>, HostError> {
        let script = wrap_script(&self.app_name, body);
        let mut args: Vec<&OsStr> = vec![OsStr::new("-e"), OsStr::new(&script)];
        args.extend_from_slice(argv);
        let output = run_bridge(OSASCRIPT, args, &[])?;
        parse_reply(&output, &self.app_name)
    }
}

impl PresentationHost for AppleScriptHost {
    fn active_presentation(&self) -> Result<ActivePresentation, HostError> {
        let body = format!(
            "set thePresentation to active presentation\n\
             return \"{STATUS_OK}\" & linefeed & (full name of thePresentation) & linefeed & (name of thePresentation)"
        );
        let payload = self.run(&body, &[])?;
        parse_presentation(&payload)
    }

    fn export_pdf(&self, target: &Path) -> Result<(), HostError> {
        // `save ... as save as PDF` overwrites an existing file itself.
        log::info!("Exporting active presentation to {}", target.display());
        let body = format!(
            "set pdfPath to item 1 of argv\n\
             save active presentation in pdfPath as save as PDF\n\
             return \"{STATUS_OK}\""
        );
        self.run(&body, &[target.as_os_str()])?;
        Ok(())
    }
}

/// Quote `value` as an AppleScript string literal.
fn applescript_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Wrap `body` in the running/presentation checks.
///
/// The running check sits outside the `tell` block so probing never launches
/// the application.
fn wrap_script(app_name: &str, body: &str) -> String {
    let app = applescript_string(app_name);
    format!(
        "on run argv\n\
         if application {app} is not running then return \"{STATUS_NOT_RUNNING}\"\n\
         tell application {app}\n\
         if (count of presentations) is 0 then return \"{STATUS_NO_PRESENTATION}\"\n\
         {body}\n\
         end tell\n\
         end run\n"
    )
}
