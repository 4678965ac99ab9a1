// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/settings.rs
//
// Export settings record and crop presets.

use crate::constant::{DEFAULT_THRESHOLD, MAX_MARGIN_SIZE, MAX_PERCENT_RETAIN};

/// User-adjustable export parameters.
///
/// Values are read at the moment an export is triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSettings {
    /// Leave the raw export untouched.
    pub skip_crop: bool,
    /// Extra white margin kept around the content, in big points.
    pub margin_size: f32,
    /// Percentage of the detected margin to keep.
    pub percent_retain: f32,
    /// Apply one crop box to every page.
    pub uniform_crop: bool,
    /// Force all pages to the same size.
    pub uniform_page_size: bool,
    /// Background detection threshold (0-255).
    pub threshold: u8,
    /// Whether the advanced panel is visible.
    pub show_advanced: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            skip_crop: false,
            margin_size: 0.0,
            percent_retain: 0.0,
            uniform_crop: true,
            uniform_page_size: true,
            threshold: DEFAULT_THRESHOLD,
            show_advanced: false,
        }
    }
}

impl ExportSettings {
    /// Overwrite percent-retain and margin size with the preset's pair.
    pub fn apply_preset(&mut self, preset: Preset) {
        let (percent_retain, margin_size) = preset.values();
        self.percent_retain = percent_retain;
        self.margin_size = margin_size;
    }

    pub fn set_percent_retain(&mut self, value: f32) {
        self.percent_retain = clamp_finite(value, MAX_PERCENT_RETAIN);
    }

    pub fn set_margin_size(&mut self, value: f32) {
        self.margin_size = clamp_finite(value, MAX_MARGIN_SIZE);
    }

    /// Set the threshold from a wider integer, saturating at the u8 bounds.
    pub fn set_threshold(&mut self, value: i32) {
        self.threshold = value.clamp(0, i32::from(u8::MAX)) as u8;
    }
}

fn clamp_finite(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Named crop presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Crop right up to the content.
    Tight,
    /// Keep a 3 bp margin.
    SmallMargin,
    /// Keep a 6 bp margin.
    MediumMargin,
    /// Keep 10% of the original margin.
    KeepOriginal,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Tight,
        Preset::SmallMargin,
        Preset::MediumMargin,
        Preset::KeepOriginal,
    ];

    /// The `(percent_retain, margin_size)` pair this preset sets.
    pub fn values(self) -> (f32, f32) {
        match self {
            Preset::Tight => (0.0, 0.0),
            Preset::SmallMargin => (0.0, 3.0),
            Preset::MediumMargin => (0.0, 6.0),
            Preset::KeepOriginal => (10.0, 0.0),
        }
    }
}
