//! FAQ accordion message handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_accordion(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AccordionToggle(index) => {
                if let Some(expanded) = self.ui.accordion_expanded.get_mut(*index) {
                    *expanded = !*expanded;
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
