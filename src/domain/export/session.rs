// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/session.rs
//
// Export session: settings plus path cache, driven by the convert action.

use std::path::{self, PathBuf};

use anyhow::Context;

use super::crop::{MarginCropper, crop_in_place};
use super::paths::{DefaultPathCache, SaveSuggestion, ensure_pdf_extension};
use super::settings::ExportSettings;
use crate::platform::PresentationHost;

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Final PDF location: the requested path, made absolute.
    pub path: PathBuf,
    /// Whether margins were cropped.
    pub cropped: bool,
}

/// State shared by every export within one run of the tool.
#[derive(Debug, Default)]
pub struct ExportSession {
    pub settings: ExportSettings,
    paths: DefaultPathCache,
    pending: Option<SaveSuggestion>,
}

impl ExportSession {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Look up the active presentation and suggest where to save it.
    ///
    /// Fails without touching the file system when the host is not running
    /// or has nothing open.
    pub fn prepare(&mut self, host: &dyn PresentationHost) -> anyhow::Result<SaveSuggestion> {
        let presentation = host
            .active_presentation()
            .context("Cannot read the active presentation")?;
        log::debug!("Active presentation: {}", presentation.full_name.display());

        let suggestion = self.paths.suggest(&presentation);
        self.pending = Some(suggestion.clone());
        Ok(suggestion)
    }

    /// Export to the chosen path and crop it unless cropping is skipped.
    ///
    /// `None` means the save dialog was cancelled: nothing is exported.
    pub fn finish(
        &mut self,
        host: &dyn PresentationHost,
        cropper: &dyn MarginCropper,
        choice: Option<PathBuf>,
    ) -> anyhow::Result<Option<ExportOutcome>> {
        let pending = self.pending.take();
        let Some(chosen) = choice else {
            log::info!("Export cancelled");
            return Ok(None);
        };

        let settings = self.settings;
        // Host and cropper resolve relative paths against different
        // working directories.
        let requested = ensure_pdf_extension(chosen);
        let target = path::absolute(&requested)
            .with_context(|| format!("Invalid export path {}", requested.display()))?;

        host.export_pdf(&target)
            .with_context(|| format!("Failed to export PDF to {}", target.display()))?;

        if let Some(suggestion) = pending {
            self.paths.remember(&suggestion.source_dir, &target);
        }

        if settings.skip_crop {
            log::info!("Exported {} (uncropped)", target.display());
            return Ok(Some(ExportOutcome {
                path: target,
                cropped: false,
            }));
        }

        crop_in_place(cropper, &settings, &target)
            .with_context(|| format!("Failed to crop margins of {}", target.display()))?;
        log::info!("Exported and cropped {}", target.display());

        Ok(Some(ExportOutcome {
            path: target,
            cropped: true,
        }))
    }
}
