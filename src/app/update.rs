// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling for the export form.

use std::path::PathBuf;

use cosmic::dialog::file_chooser;
use cosmic::{Action, Task};

use super::{AppMessage, Ppt2FigApp};
use crate::constant::PDF_EXTENSION;
use crate::domain::export::SaveSuggestion;
use crate::fl;

pub fn update(app: &mut Ppt2FigApp, message: AppMessage) -> Task<Action<AppMessage>> {
    match message {
        AppMessage::Convert => return begin_export(app),
        AppMessage::SaveTargetChosen(choice) => finish_export(app, choice),
        AppMessage::SaveDialogFailed(why) => {
            app.model.awaiting_target = false;
            app.model.show_error(&anyhow::anyhow!("Save dialog failed: {why}"));
        }

        AppMessage::ToggleAdvanced => {
            let settings = app.model.settings_mut();
            settings.show_advanced = !settings.show_advanced;
            return app.fit_window();
        }
        AppMessage::ApplyPreset(preset) => app.model.settings_mut().apply_preset(preset),
        AppMessage::SetPercentRetain(value) => app.model.settings_mut().set_percent_retain(value),
        AppMessage::SetMarginSize(value) => app.model.settings_mut().set_margin_size(value),
        AppMessage::SetThreshold(value) => app.model.settings_mut().set_threshold(value),
        AppMessage::SetSkipCrop(value) => app.model.settings_mut().skip_crop = value,
        AppMessage::SetUniformCrop(value) => app.model.settings_mut().uniform_crop = value,
        AppMessage::SetUniformPageSize(value) => {
            app.model.settings_mut().uniform_page_size = value;
        }

        AppMessage::OpenExported(path) => {
            app.model.close_dialog();
            if let Err(e) = open::that(&path) {
                app.model.show_error(
                    &anyhow::Error::new(e).context(format!("Cannot open {}", path.display())),
                );
            }
        }
        AppMessage::CloseDialog => app.model.close_dialog(),
    }

    Task::none()
}

/// Query the host, then ask where to save.
fn begin_export(app: &mut Ppt2FigApp) -> Task<Action<AppMessage>> {
    if app.model.awaiting_target {
        return Task::none();
    }

    match app.model.session.prepare(app.host.as_ref()) {
        Ok(suggestion) => {
            app.model.awaiting_target = true;
            save_dialog(suggestion)
        }
        Err(e) => {
            app.model.show_error(&e);
            Task::none()
        }
    }
}

/// Export to the chosen path. Blocks until the host and the crop command
/// are done.
fn finish_export(app: &mut Ppt2FigApp, choice: Option<PathBuf>) {
    app.model.awaiting_target = false;

    match app
        .model
        .session
        .finish(app.host.as_ref(), &app.cropper, choice)
    {
        Ok(Some(outcome)) => app.model.show_exported(outcome),
        Ok(None) => {}
        Err(e) => app.model.show_error(&e),
    }
}

fn save_dialog(suggestion: SaveSuggestion) -> Task<Action<AppMessage>> {
    let title = fl!("save-title");
    let filter_label = fl!("pdf-filter");
    let directory = suggestion.directory().to_path_buf();
    let file_name = suggestion.file_name();

    cosmic::task::future(async move {
        let dialog = file_chooser::save::Dialog::new()
            .title(title)
            .directory(directory)
            .file_name(file_name)
            .filter(file_chooser::FileFilter::new(filter_label).extension(PDF_EXTENSION));

        let message = match dialog.save_file().await {
            Ok(response) => AppMessage::SaveTargetChosen(
                response.url().and_then(|url| url.to_file_path().ok()),
            ),
            Err(file_chooser::Error::Cancelled) => AppMessage::SaveTargetChosen(None),
            Err(why) => AppMessage::SaveDialogFailed(why.to_string()),
        };
        Action::App(message)
    })
}
