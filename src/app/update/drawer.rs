//! Navigation drawer message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::{App, Message};
use crate::content;

impl App {
    pub(super) fn handle_drawer(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DrawerToggle => {
                if self.ui.drawer.open {
                    self.close_drawer();
                } else {
                    self.ui.drawer.open = true;
                    self.ui.drawer.animation.go_mut(true, Instant::now());
                }
                Some(Task::none())
            }

            Message::DrawerClose => {
                self.close_drawer();
                Some(Task::none())
            }

            Message::DrawerLinkActivated(index) => {
                // Navigating always closes the drawer, then the page scrolls
                // to the linked section
                self.close_drawer();
                let target_y = section_scroll_position(*index);
                Some(self.scroll_page_to(target_y))
            }

            _ => None,
        }
    }

    /// Close the drawer; no-op when already closed
    pub(super) fn close_drawer(&mut self) {
        if self.ui.drawer.open {
            self.ui.drawer.open = false;
            self.ui.drawer.animation.go_mut(false, Instant::now());
        }
    }

    /// Scroll the page and keep reveal state in sync with the new offset
    pub(super) fn scroll_page_to(&mut self, target_y: f32) -> Task<Message> {
        self.ui.scroll_top = target_y;
        self.ui.reveals.on_viewport_change(
            target_y,
            self.core.window_size.height,
            Instant::now(),
        );
        iced::widget::operation::scroll_to(
            iced::widget::Id::new("page_scroll"),
            iced::widget::scrollable::AbsoluteOffset {
                x: Some(0.0),
                y: Some(target_y),
            },
        )
    }
}

/// Target scroll offset for each drawer link, in layout order
fn section_scroll_position(index: usize) -> f32 {
    let services_top = content::HERO_HEIGHT;
    let pickup_top =
        services_top + content::SECTION_HEADER_HEIGHT + content::SERVICE_CARD_HEIGHT;
    let faq_top = pickup_top
        + content::SECTION_HEADER_HEIGHT
        + content::PICKUPS.len() as f32
            * (content::PICKUP_CARD_HEIGHT + content::CARD_SPACING);

    match index {
        0 => 0.0,
        1 => services_top,
        2 => pickup_top,
        // Contact sits below the FAQ block
        3 => faq_top,
        _ => faq_top + content::SECTION_HEADER_HEIGHT + 240.0,
    }
}
