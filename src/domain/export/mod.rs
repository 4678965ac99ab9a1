// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/mod.rs
//
// Export pipeline: settings, save paths, margin cropping and the session
// that drives them.

pub mod crop;
pub mod paths;
pub mod session;
pub mod settings;

pub use crop::CommandCropper;
pub use paths::SaveSuggestion;
pub use session::{ExportOutcome, ExportSession};
pub use settings::{ExportSettings, Preset};
