//! Keyboard message handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, _modifiers) => {
                match key {
                    Key::Named(Named::Escape) => {
                        self.close_drawer();
                    }
                    Key::Named(Named::ArrowLeft) => {
                        return Some(self.update(Message::SliderNavigate(-1)));
                    }
                    Key::Named(Named::ArrowRight) => {
                        return Some(self.update(Message::SliderNavigate(1)));
                    }
                    _ => {}
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
