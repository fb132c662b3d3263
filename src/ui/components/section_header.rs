//! Section header component

use iced::widget::{container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::content::SECTION_HEADER_HEIGHT;
use crate::i18n::{Key, Locale};

/// Centered section title occupying the fixed header band
pub fn view(title: Key, locale: Locale) -> Element<'static, Message> {
    container(text(locale.get(title)).size(26))
        .width(Fill)
        .height(SECTION_HEADER_HEIGHT)
        .center_x(Fill)
        .align_y(iced::alignment::Vertical::Center)
        .padding(Padding::new(8.0))
        .into()
}
