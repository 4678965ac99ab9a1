// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/dialog.rs
//
// Modal error and confirmation messages.

use cosmic::Element;
use cosmic::widget::{self, button};

use crate::app::{AppMessage, DialogPage};
use crate::fl;

pub fn dialog(page: &DialogPage) -> Element<'_, AppMessage> {
    match page {
        DialogPage::Error(message) => widget::dialog()
            .title(fl!("error-title"))
            .body(message.as_str())
            .primary_action(button::standard(fl!("ok")).on_press(AppMessage::CloseDialog))
            .into(),

        DialogPage::Exported(outcome) => {
            let path = outcome.path.display().to_string();
            let body = if outcome.cropped {
                fl!("exported-cropped-to", path = path)
            } else {
                fl!("exported-to", path = path)
            };
            widget::dialog()
                .title(fl!("success-title"))
                .body(body)
                .primary_action(button::suggested(fl!("ok")).on_press(AppMessage::CloseDialog))
                .secondary_action(
                    button::standard(fl!("open-pdf"))
                        .on_press(AppMessage::OpenExported(outcome.path.clone())),
                )
                .into()
        }
    }
}
