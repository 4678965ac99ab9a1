// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: parse arguments, then open the form or export headlessly.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;
mod platform;

use std::path::PathBuf;

use clap::Parser;

use crate::app::{Flags, Ppt2FigApp};
use crate::config::AppConfig;
use crate::domain::export::{CommandCropper, ExportSession, ExportSettings, Preset};

/// Export the open presentation to PDF and crop its white margins.
#[derive(Debug, Clone, Parser)]
#[command(name = "ppt2fig", version, about)]
pub struct Args {
    /// Export straight to this path instead of opening the window.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep the raw export without cropping margins.
    #[arg(long)]
    pub no_crop: bool,

    /// Apply a crop preset before the individual overrides below.
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Percentage of the detected margin to keep (0-100).
    #[arg(long, value_name = "PERCENT")]
    pub percent_retain: Option<f32>,

    /// Extra white margin in big points (0-50).
    #[arg(long, value_name = "BP")]
    pub margin: Option<f32>,

    /// Background detection threshold (0-255).
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Compute a separate crop box for each page.
    #[arg(long)]
    pub no_uniform: bool,

    /// Keep each page's own size after cropping.
    #[arg(long)]
    pub no_same_size: bool,
}

impl Args {
    /// Starting export settings: defaults, then preset, then overrides.
    pub fn export_settings(&self) -> ExportSettings {
        let mut settings = ExportSettings::default();
        if let Some(preset) = self.preset {
            settings.apply_preset(preset);
        }
        if let Some(percent) = self.percent_retain {
            settings.set_percent_retain(percent);
        }
        if let Some(margin) = self.margin {
            settings.set_margin_size(margin);
        }
        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
        }
        settings.skip_crop = self.no_crop;
        settings.uniform_crop = !self.no_uniform;
        settings.uniform_page_size = !self.no_same_size;
        settings
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    i18n::init(&i18n_embed::DesktopLanguageRequester::requested_languages());

    let config = AppConfig::load(app::APP_ID);
    let settings = args.export_settings();

    if let Some(output) = args.output {
        return export_headless(&config, settings, output);
    }

    let (width, height) = constant::COMPACT_WINDOW;
    let window_settings =
        cosmic::app::Settings::default().size(cosmic::iced::Size::new(width, height));
    cosmic::app::run::<Ppt2FigApp>(window_settings, Flags { config, settings })?;
    Ok(())
}

/// Run one export without a window.
fn export_headless(
    config: &AppConfig,
    settings: ExportSettings,
    output: PathBuf,
) -> anyhow::Result<()> {
    let host = platform::detect(config);
    let cropper = CommandCropper::new(config.crop_command.clone());
    let mut session = ExportSession::new(settings);

    session.prepare(host.as_ref())?;
    if let Some(outcome) = session.finish(host.as_ref(), &cropper, Some(output))? {
        println!("{}", outcome.path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keep_form_defaults() {
        let args = Args::try_parse_from(["ppt2fig"]).unwrap();
        assert!(args.output.is_none());
        assert_eq!(args.export_settings(), ExportSettings::default());
    }

    #[test]
    fn preset_is_applied_before_overrides() {
        let args = Args::try_parse_from([
            "ppt2fig",
            "--preset",
            "medium-margin",
            "--percent-retain",
            "25",
            "--no-uniform",
            "-o",
            "fig.pdf",
        ])
        .unwrap();
        let settings = args.export_settings();

        assert_eq!(settings.margin_size, 6.0);
        assert_eq!(settings.percent_retain, 25.0);
        assert!(!settings.uniform_crop);
        assert!(settings.uniform_page_size);
        assert_eq!(args.output, Some(PathBuf::from("fig.pdf")));
    }

    #[test]
    fn out_of_range_values_are_clamped_or_rejected() {
        let args = Args::try_parse_from(["ppt2fig", "--margin", "75", "--no-crop"]).unwrap();
        let settings = args.export_settings();
        assert_eq!(settings.margin_size, 50.0);
        assert!(settings.skip_crop);

        assert!(Args::try_parse_from(["ppt2fig", "--threshold", "300"]).is_err());
        assert!(Args::try_parse_from(["ppt2fig", "--preset", "loose"]).is_err());
    }
}
