// SPDX-License-Identifier: GPL-3.0-or-later
// src/platform/mod.rs
//
// Host presentation application automation.

pub mod mac;
pub mod windows;

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::config::AppConfig;
use crate::constant::{STATUS_NO_PRESENTATION, STATUS_NOT_RUNNING, STATUS_OK};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("{app} is not running")]
    NotRunning { app: String },

    #[error("no presentation is open in {app}")]
    NoPresentation { app: String },

    #[error("exporting presentations is not supported on this platform")]
    Unsupported,

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("automation bridge failed: {0}")]
    Bridge(String),
}

/// The presentation currently focused in the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePresentation {
    /// Full path, or a bare name for presentations that were never saved.
    pub full_name: PathBuf,
    /// Display name including extension, e.g. `Talk.pptx`.
    pub name: String,
}

/// Automation interface of the host presentation application.
pub trait PresentationHost {
    /// Query the active presentation.
    fn active_presentation(&self) -> Result<ActivePresentation, HostError>;

    /// Export the active presentation to `target`, replacing any existing file.
    ///
    /// An existing file is only touched once the host has confirmed an open
    /// presentation.
    fn export_pdf(&self, target: &Path) -> Result<(), HostError>;
}

/// Pick the host implementation for the running OS.
pub fn detect(config: &AppConfig) -> Box<dyn PresentationHost> {
    if cfg!(target_os = "macos") {
        Box::new(mac::AppleScriptHost::new(config.host_app_name.clone()))
    } else if cfg!(target_os = "windows") {
        Box::new(windows::PowerShellHost::new())
    } else {
        Box::new(UnsupportedHost)
    }
}

/// Host for platforms without a supported presentation application.
#[derive(Debug, Default)]
pub struct UnsupportedHost;

impl PresentationHost for UnsupportedHost {
    fn active_presentation(&self) -> Result<ActivePresentation, HostError> {
        Err(HostError::Unsupported)
    }

    fn export_pdf(&self, _target: &Path) -> Result<(), HostError> {
        Err(HostError::Unsupported)
    }
}

// =============================================================================
// Bridge protocol
// =============================================================================

/// Captured output of a bridge script run.
#[derive(Debug, Clone)]
pub struct BridgeOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run a bridge program and capture its output as text.
pub fn run_bridge<I, S>(
    program: &str,
    args: I,
    envs: &[(&str, &OsStr)],
) -> Result<BridgeOutput, HostError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    for (key, value) in envs {
        command.env(key, value);
    }

    log::debug!("Running bridge {program}");
    let out = command.output().map_err(|source| HostError::Launch {
        program: program.to_string(),
        source,
    })?;

    Ok(BridgeOutput {
        success: out.status.success(),
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
    })
}

/// Classify a bridge reply by its status token and return the payload lines.
pub fn parse_reply(output: &BridgeOutput, app: &str) -> Result<Vec<String>, HostError> {
    let mut lines = output
        .stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .skip_while(|line| line.trim().is_empty());

    match lines.next().map(str::trim) {
        Some(STATUS_OK) if output.success => Ok(lines.map(str::to_string).collect()),
        Some(STATUS_NOT_RUNNING) => Err(HostError::NotRunning {
            app: app.to_string(),
        }),
        Some(STATUS_NO_PRESENTATION) => Err(HostError::NoPresentation {
            app: app.to_string(),
        }),
        _ => Err(HostError::Bridge(failure_text(output))),
    }
}

/// Build an `ActivePresentation` from the `full name` / `name` payload.
pub fn parse_presentation(payload: &[String]) -> Result<ActivePresentation, HostError> {
    match payload {
        [full_name, name, ..] if !full_name.is_empty() && !name.is_empty() => {
            Ok(ActivePresentation {
                full_name: PathBuf::from(full_name),
                name: name.clone(),
            })
        }
        _ => Err(HostError::Bridge(
            "could not read the active presentation's name".to_string(),
        )),
    }
}

fn failure_text(output: &BridgeOutput) -> String {
    let stderr = output.stderr.trim();
    let stdout = output.stdout.trim();
    match (stdout.is_empty(), stderr.is_empty()) {
        (true, true) => "no output".to_string(),
        (false, true) => stdout.to_string(),
        (true, false) => stderr.to_string(),
        (false, false) => format!("{stdout}\n{stderr}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(success: bool, stdout: &str, stderr: &str) -> BridgeOutput {
        BridgeOutput {
            success,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn ok_reply_yields_payload_lines() {
        let out = reply(true, "ppt2fig:ok\r\nC:\\talks\\Review.pptx\r\nReview.pptx\r\n", "");
        let payload = parse_reply(&out, "PowerPoint").unwrap();
        assert_eq!(payload, ["C:\\talks\\Review.pptx", "Review.pptx"]);

        let presentation = parse_presentation(&payload).unwrap();
        assert_eq!(presentation.name, "Review.pptx");
        assert_eq!(
            presentation.full_name,
            PathBuf::from("C:\\talks\\Review.pptx")
        );
    }

    #[test]
    fn status_tokens_map_to_typed_errors() {
        let not_running = parse_reply(&reply(true, "ppt2fig:not-running\n", ""), "PowerPoint");
        assert!(matches!(not_running, Err(HostError::NotRunning { .. })));

        let empty = parse_reply(&reply(true, "\nppt2fig:no-presentation\n", ""), "PowerPoint");
        assert!(matches!(empty, Err(HostError::NoPresentation { .. })));
    }

    #[test]
    fn unknown_reply_carries_bridge_text() {
        let out = reply(false, "", "execution error: access not allowed (-1743)\n");
        match parse_reply(&out, "PowerPoint") {
            Err(HostError::Bridge(text)) => {
                assert_eq!(text, "execution error: access not allowed (-1743)")
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn ok_token_with_failed_exit_status_is_a_failure() {
        let out = reply(false, "ppt2fig:ok\n", "boom");
        assert!(matches!(
            parse_reply(&out, "PowerPoint"),
            Err(HostError::Bridge(_))
        ));
    }

    #[test]
    fn short_payload_is_rejected() {
        assert!(parse_presentation(&["only-one".to_string()]).is_err());
        assert!(parse_presentation(&[String::new(), "x.pptx".to_string()]).is_err());
    }

    #[test]
    fn unsupported_host_refuses_everything() {
        let host = UnsupportedHost;
        assert!(matches!(
            host.active_presentation(),
            Err(HostError::Unsupported)
        ));
        assert!(matches!(
            host.export_pdf(Path::new("x.pdf")),
            Err(HostError::Unsupported)
        ));
    }
}
