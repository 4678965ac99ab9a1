// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// Render the export form and its dialogs.

mod advanced;
mod dialog;

pub use dialog::dialog;

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget::{self, button, container};

use crate::app::{AppMessage, AppModel};
use crate::fl;

/// Convert button, advanced toggle and, when expanded, the crop settings.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let settings = model.settings();

    let convert = button::suggested(fl!("convert"))
        .on_press_maybe((!model.awaiting_target).then_some(AppMessage::Convert));

    let toggle_label = if settings.show_advanced {
        fl!("hide-advanced")
    } else {
        fl!("show-advanced")
    };
    let toggle = button::text(toggle_label).on_press(AppMessage::ToggleAdvanced);

    let mut content = widget::column()
        .spacing(8)
        .padding([10, 15])
        .push(container(convert).center_x(Length::Fill))
        .push(container(toggle).center_x(Length::Fill));

    if settings.show_advanced {
        content = content.push(advanced::view(settings));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
