// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: user actions and dialog results.

use std::path::PathBuf;

use crate::domain::export::Preset;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // Export.
    Convert,
    SaveTargetChosen(Option<PathBuf>),
    SaveDialogFailed(String),

    // Advanced panel.
    ToggleAdvanced,
    ApplyPreset(Preset),
    SetPercentRetain(f32),
    SetMarginSize(f32),
    SetThreshold(i32),
    SetSkipCrop(bool),
    SetUniformCrop(bool),
    SetUniformPageSize(bool),

    // Dialogs.
    OpenExported(PathBuf),
    CloseDialog,
}
