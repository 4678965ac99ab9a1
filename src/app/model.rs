// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use crate::domain::export::{ExportOutcome, ExportSession, ExportSettings};

/// Modal message shown over the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPage {
    Error(String),
    Exported(ExportOutcome),
}

pub struct AppModel {
    // Export state.
    pub session: ExportSession,
    /// A save dialog is open; further convert clicks are ignored.
    pub awaiting_target: bool,

    // UI state.
    pub dialog: Option<DialogPage>,
}

impl AppModel {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            session: ExportSession::new(settings),
            awaiting_target: false,
            dialog: None,
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.session.settings
    }

    pub fn settings_mut(&mut self) -> &mut ExportSettings {
        &mut self.session.settings
    }

    /// Show an error with its full cause chain.
    pub fn show_error(&mut self, err: &anyhow::Error) {
        log::error!("{err:#}");
        self.dialog = Some(DialogPage::Error(format!("{err:#}")));
    }

    pub fn show_exported(&mut self, outcome: ExportOutcome) {
        self.dialog = Some(DialogPage::Exported(outcome));
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }
}
