// SPDX-License-Identifier: GPL-3.0-or-later
// src/platform/windows.rs
//
// Windows host: PowerPoint COM automation through PowerShell.

use std::path::Path;

use super::{
    ActivePresentation, HostError, PresentationHost, parse_presentation, parse_reply, run_bridge,
};
use crate::constant::{OUTPUT_ENV_VAR, STATUS_NO_PRESENTATION, STATUS_NOT_RUNNING, STATUS_OK};

const POWERSHELL: &str = "powershell.exe";
const APP_LABEL: &str = "PowerPoint";

/// `ppFixedFormatTypePDF`
const FORMAT_PDF: u8 = 2;
/// `ppPrintCurrent`: export the slide currently shown.
const RANGE_CURRENT: u8 = 3;

/// Attaches to the running PowerPoint instance over COM.
#[derive(Debug, Clone, Default)]
pub struct PowerShellHost;

impl PowerShellHost {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, body: &str, target: Option<&Path>) -> Result<Vec<String>, HostError> {
        let script = wrap_script(body);
        let args = ["-NoProfile", "-NonInteractive", "-Command", script.as_str()];
        let output = match target {
            Some(path) => run_bridge(POWERSHELL, args, &[(OUTPUT_ENV_VAR, path.as_os_str())])?,
            None => run_bridge(POWERSHELL, args, &[])?,
        };
        parse_reply(&output, APP_LABEL)
    }
}

impl PresentationHost for PowerShellHost {
    fn active_presentation(&self) -> Result<ActivePresentation, HostError> {
        let body = format!("'{STATUS_OK}'\n$p.FullName\n$p.Name");
        let payload = self.run(&body, None)?;
        parse_presentation(&payload)
    }

    fn export_pdf(&self, target: &Path) -> Result<(), HostError> {
        log::info!("Exporting current slide to {}", target.display());
        self.run(&export_body(), Some(target))?;
        Ok(())
    }
}

/// Runs after `$p` is bound, so an existing target only goes away once a
/// presentation is known to be open.
fn export_body() -> String {
    format!(
        "if (Test-Path -LiteralPath $env:{OUTPUT_ENV_VAR}) {{ Remove-Item -LiteralPath $env:{OUTPUT_ENV_VAR} -Force }}\n\
         $m = [Type]::Missing\n\
         $p.ExportAsFixedFormat($env:{OUTPUT_ENV_VAR}, {FORMAT_PDF}, 1, 0, 1, 1, 0, $m, {RANGE_CURRENT})\n\
         '{STATUS_OK}'"
    )
}

/// Attach to PowerPoint and bind the active presentation to `$p` before
/// running `body`. Errors escape as a non-zero exit with text on stderr.
fn wrap_script(body: &str) -> String {
    format!(
        "$ErrorActionPreference = 'Stop'\n\
         [Console]::OutputEncoding = [Text.Encoding]::UTF8\n\
         try {{ $app = [Runtime.InteropServices.Marshal]::GetActiveObject('PowerPoint.Application') }}\n\
         catch {{ '{STATUS_NOT_RUNNING}'; exit 0 }}\n\
         if ($app.Presentations.Count -eq 0) {{ '{STATUS_NO_PRESENTATION}'; exit 0 }}\n\
         $p = $app.ActivePresentation\n\
         {body}\n"
    )
}
