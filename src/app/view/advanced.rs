// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/advanced.rs
//
// Advanced panel: crop presets and detailed parameters.

use cosmic::Element;
use cosmic::widget::{self, button, settings, spin_button, text, toggler};

use crate::app::AppMessage;
use crate::constant::{MARGIN_SIZE_STEP, MAX_MARGIN_SIZE, MAX_PERCENT_RETAIN, PERCENT_RETAIN_STEP};
use crate::domain::export::{ExportSettings, Preset};
use crate::fl;

pub fn view<'a>(current: &ExportSettings) -> Element<'a, AppMessage> {
    let presets = Preset::ALL
        .into_iter()
        .fold(widget::row().spacing(4), |row, preset| {
            row.push(button::standard(preset_label(preset)).on_press(AppMessage::ApplyPreset(preset)))
        });

    let parameters = settings::section()
        .title(fl!("parameters"))
        .add(settings::item(
            fl!("percent-retain"),
            spin_button(
                format!("{:.0}", current.percent_retain),
                current.percent_retain,
                PERCENT_RETAIN_STEP,
                0.0,
                MAX_PERCENT_RETAIN,
                AppMessage::SetPercentRetain,
            ),
        ))
        .add(settings::item(
            fl!("margin-size"),
            spin_button(
                format!("{:.1}", current.margin_size),
                current.margin_size,
                MARGIN_SIZE_STEP,
                0.0,
                MAX_MARGIN_SIZE,
                AppMessage::SetMarginSize,
            ),
        ))
        .add(settings::item(
            fl!("threshold"),
            spin_button(
                current.threshold.to_string(),
                i32::from(current.threshold),
                1,
                0,
                i32::from(u8::MAX),
                AppMessage::SetThreshold,
            ),
        ))
        .add(settings::item(
            fl!("skip-crop"),
            toggler(current.skip_crop).on_toggle(AppMessage::SetSkipCrop),
        ))
        .add(settings::item(
            fl!("uniform-crop"),
            toggler(current.uniform_crop).on_toggle(AppMessage::SetUniformCrop),
        ))
        .add(settings::item(
            fl!("uniform-page-size"),
            toggler(current.uniform_page_size).on_toggle(AppMessage::SetUniformPageSize),
        ));

    widget::column()
        .spacing(8)
        .push(text::heading(fl!("crop-settings")))
        .push(settings::section().title(fl!("presets")).add(presets))
        .push(parameters)
        .into()
}

fn preset_label(preset: Preset) -> String {
    match preset {
        Preset::Tight => fl!("preset-tight"),
        Preset::SmallMargin => fl!("preset-small-margin"),
        Preset::MediumMargin => fl!("preset-medium-margin"),
        Preset::KeepOriginal => fl!("preset-keep-original"),
    }
}
