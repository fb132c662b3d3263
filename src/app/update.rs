//! Message update handlers - thin dispatcher delegating to submodules

mod accordion;
mod drawer;
mod keyboard;
mod settings;
mod slider;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_slider(&message) {
            return task;
        }
        if let Some(task) = self.handle_drawer(&message) {
            return task;
        }
        if let Some(task) = self.handle_accordion(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
