//! Settings message handlers

use iced::Task;

use crate::app::{App, Message};
use crate::i18n::{Language, Locale};

impl App {
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                self.save_settings();
                Some(Task::none())
            }

            Message::ToggleLanguage => {
                let language = match self.core.locale.language {
                    Language::Japanese => Language::English,
                    Language::English => Language::Japanese,
                };
                self.core.locale = Locale::new(language);
                self.core.settings.display.language = language.code().to_string();
                self.save_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
