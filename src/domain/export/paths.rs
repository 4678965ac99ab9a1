// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/paths.rs
//
// Export path suggestions and the per-directory default path cache.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constant::PDF_EXTENSION;
use crate::platform::ActivePresentation;

/// Pre-filled values for the save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSuggestion {
    /// Directory of the presentation being exported (cache key).
    pub source_dir: PathBuf,
    /// Suggested export path.
    pub path: PathBuf,
}

impl SaveSuggestion {
    /// Directory the save dialog should open in.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or(&self.source_dir)
    }

    /// File name the save dialog should pre-fill.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Last chosen export path per source-document directory.
///
/// Lives for the process lifetime only.
#[derive(Debug, Default)]
pub struct DefaultPathCache {
    entries: HashMap<PathBuf, PathBuf>,
}

impl DefaultPathCache {
    /// Suggest an export path for `presentation`, seeding the cache with
    /// `<dir>/<stem>.pdf` the first time its directory is seen.
    pub fn suggest(&mut self, presentation: &ActivePresentation) -> SaveSuggestion {
        let source_dir = source_directory(&presentation.full_name);
        let path = self
            .entries
            .entry(source_dir.clone())
            .or_insert_with(|| source_dir.join(default_file_name(&presentation.name)))
            .clone();
        SaveSuggestion { source_dir, path }
    }

    /// Record the path the user actually exported to.
    pub fn remember(&mut self, source_dir: &Path, chosen: &Path) {
        self.entries
            .insert(source_dir.to_path_buf(), chosen.to_path_buf());
    }
}

/// Directory containing the presentation.
///
/// Unsaved presentations report a bare name; those fall back to the user's
/// documents directory.
pub fn source_directory(full_name: &Path) -> PathBuf {
    match full_name.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

/// `<stem>.pdf` for a presentation display name such as `Talk.pptx`.
pub fn default_file_name(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "presentation".to_string());
    format!("{stem}.{PDF_EXTENSION}")
}

/// Append `.pdf` unless the path already ends with it (any case).
pub fn ensure_pdf_extension(path: PathBuf) -> PathBuf {
    let has_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION));
    if has_pdf {
        return path;
    }
    let mut raw: OsString = path.into_os_string();
    raw.push(".");
    raw.push(PDF_EXTENSION);
    PathBuf::from(raw)
}
