//! FAQ accordion component
//!
//! Each entry is a header button toggling its answer panel. Expansion state
//! lives in the app; the view is a plain projection of the expanded flags.

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content::FaqEntry;
use crate::i18n::Locale;
use crate::ui::theme;

/// Build one accordion entry
pub fn entry(index: usize, faq: &FaqEntry, expanded: bool, locale: Locale) -> Element<'static, Message> {
    let chevron = svg(svg::Handle::from_memory(
        crate::ui::icons::CHEVRON_DOWN.as_bytes(),
    ))
    .width(16)
    .height(16)
    .style(move |theme, _status| svg::Style {
        color: Some(if expanded {
            theme::text_primary(theme)
        } else {
            theme::text_muted(theme)
        }),
    });

    let header = button(
        row![
            text(locale.get(faq.question)).size(15),
            Space::new().width(Fill),
            chevron,
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(Padding::new(14.0).left(18.0).right(18.0))
    .style(theme::accordion_header)
    .on_press(Message::AccordionToggle(index));

    let mut body = column![header].width(Fill).spacing(0);

    if expanded {
        body = body.push(
            container(
                text(locale.get(faq.answer))
                    .size(14)
                    .style(|theme| text::Style {
                        color: Some(theme::text_secondary(theme)),
                    }),
            )
            .width(Fill)
            .padding(Padding::new(14.0).left(18.0).right(18.0)),
        );
    }

    body.into()
}
