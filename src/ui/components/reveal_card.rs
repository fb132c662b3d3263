//! Reveal card wrapper
//!
//! Fades and slides content in as its reveal progress moves from 0 to 1.
//! The container's text color propagates to children, so the whole card
//! fades as one unit.

use iced::widget::{Space, column, container};
use iced::{Background, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Vertical travel of the slide-up entrance in px
const RISE: f32 = 24.0;

/// Wrap `content` in a card surface at the given fade-in progress
pub fn wrap(content: Element<'_, Message>, progress: f32, height: f32) -> Element<'_, Message> {
    let progress = progress.clamp(0.0, 1.0);
    let rise = RISE * (1.0 - progress);

    let card = container(content)
        .width(Fill)
        .height(height - rise)
        .padding(20)
        .style(move |t| {
            let mut style = theme::card(t);
            if let Some(Background::Color(c)) = &mut style.background {
                c.a *= progress;
            }
            style.border.color.a *= progress;
            if let Some(text_color) = &mut style.text_color {
                text_color.a *= progress;
            }
            style
        });

    column![Space::new().height(rise), card]
        .width(Fill)
        .height(height)
        .into()
}
