// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Detection threshold the crop command uses when `-t` is not given.
pub const DEFAULT_THRESHOLD: u8 = 191;

/// Suffix appended to the export path for the intermediate cropped file.
pub const CROP_TEMP_SUFFIX: &str = ".crop";

/// Extension of every exported file.
pub const PDF_EXTENSION: &str = "pdf";

/// Upper bound of the percent-retain control.
pub const MAX_PERCENT_RETAIN: f32 = 100.0;

/// Step of the percent-retain control.
pub const PERCENT_RETAIN_STEP: f32 = 1.0;

/// Upper bound of the extra margin control, in big points.
pub const MAX_MARGIN_SIZE: f32 = 50.0;

/// Step of the extra margin control, in big points.
pub const MARGIN_SIZE_STEP: f32 = 0.5;

/// Window size while the advanced panel is hidden.
pub const COMPACT_WINDOW: (f32, f32) = (300.0, 100.0);

/// Window size while the advanced panel is shown.
pub const EXPANDED_WINDOW: (f32, f32) = (320.0, 380.0);

/// First stdout line of a bridge script that completed normally.
pub const STATUS_OK: &str = "ppt2fig:ok";

/// First stdout line of a bridge script when the host application is closed.
pub const STATUS_NOT_RUNNING: &str = "ppt2fig:not-running";

/// First stdout line of a bridge script when no presentation is open.
pub const STATUS_NO_PRESENTATION: &str = "ppt2fig:no-presentation";

/// Environment variable carrying the export target to the Windows bridge.
pub const OUTPUT_ENV_VAR: &str = "PPT2FIG_OUTPUT";
