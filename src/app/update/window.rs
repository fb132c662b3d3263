//! Window and page-scroll message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::{App, Message};
use crate::ui::components::drawer::BREAKPOINT;

impl App {
    pub(super) fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.core.window_size = *size;

                // Wide layouts have no drawer; drop any open one so its state
                // does not carry across the breakpoint
                if size.width > BREAKPOINT && self.ui.drawer.open {
                    tracing::debug!("window crossed breakpoint, closing drawer");
                    self.close_drawer();
                }

                // Re-evaluate reveals for the new viewport; the slider track
                // re-projects on the repaint this event already schedules
                self.ui.reveals.on_viewport_change(
                    self.ui.scroll_top,
                    size.height,
                    Instant::now(),
                );
                Some(Task::none())
            }

            Message::ContentScrolled(y_offset) => {
                self.ui.scroll_top = *y_offset;
                self.ui.reveals.on_viewport_change(
                    *y_offset,
                    self.core.window_size.height,
                    Instant::now(),
                );
                Some(Task::none())
            }

            Message::AnimationTick => {
                // Repaint trigger; animations interpolate from wall time
                Some(Task::none())
            }

            _ => None,
        }
    }
}
