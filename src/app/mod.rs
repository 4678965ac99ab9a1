// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

mod message;
mod model;
mod update;
mod view;

pub use message::AppMessage;
pub use model::{AppModel, DialogPage};

use cosmic::app::Core;
use cosmic::iced::window;
use cosmic::{Action, Element, Task};

use crate::config::AppConfig;
use crate::domain::export::{CommandCropper, ExportSettings};
use crate::fl;
use crate::platform::{self, PresentationHost};

pub const APP_ID: &str = "io.github.ppt2fig.Ppt2Fig";

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub struct Flags {
    pub config: AppConfig,
    pub settings: ExportSettings,
}

/// Main application type.
pub struct Ppt2FigApp {
    core: Core,
    pub model: AppModel,
    host: Box<dyn PresentationHost>,
    cropper: CommandCropper,
}

impl cosmic::Application for Ppt2FigApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(mut core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let Flags { config, settings } = flags;

        core.window.header_title = fl!("app-title");

        let host = platform::detect(&config);
        let cropper = CommandCropper::new(config.crop_command.clone());

        let init_task = match core.main_window_id() {
            Some(id) if config.always_on_top => {
                window::change_level(id, window::Level::AlwaysOnTop)
            }
            _ => Task::none(),
        };

        (
            Self {
                core,
                model: AppModel::new(settings),
                host,
                cropper,
            },
            init_task,
        )
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model)
    }

    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        self.model.dialog.as_ref().map(view::dialog)
    }
}

impl Ppt2FigApp {
    /// Resize the window to fit the advanced panel's visibility.
    fn fit_window(&self) -> Task<Action<AppMessage>> {
        let Some(id) = self.core.main_window_id() else {
            return Task::none();
        };
        let (width, height) = if self.model.settings().show_advanced {
            crate::constant::EXPANDED_WINDOW
        } else {
            crate::constant::COMPACT_WINDOW
        };
        window::resize(id, cosmic::iced::Size::new(width, height))
    }
}
