//! Navigation drawer component
//!
//! Hamburger button in the header, plus the overlay + sliding panel stacked
//! over the page while open. The overlay intercepts clicks so the page
//! underneath stays inert, matching a scroll-locked backdrop.

use iced::widget::{Space, button, column, container, mouse_area, row, svg, text, toggler};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Drawer panel width in px
pub const PANEL_WIDTH: f32 = 300.0;

/// Window widths above this never show the drawer; crossing it force-closes
/// an open drawer so state does not carry into the wide layout
pub const BREAKPOINT: f32 = 860.0;

/// Hamburger toggle for the page header
pub fn hamburger(open: bool) -> Element<'static, Message> {
    let icon = if open {
        crate::ui::icons::CLOSE
    } else {
        crate::ui::icons::MENU
    };
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(24)
            .height(24)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_primary(theme)),
            }),
    )
    .padding(8)
    .style(theme::icon_button)
    .on_press(Message::DrawerToggle)
    .into()
}

/// Overlay + panel, slid in by `progress` (0.0 closed, 1.0 open)
pub fn view(progress: f32, locale: Locale, dark_mode: bool) -> Element<'static, Message> {
    let links = content::NAV_LINKS.iter().enumerate().map(|(i, link)| {
        button(text(locale.get(link.label)).size(16))
            .width(Fill)
            .padding(Padding::new(12.0).left(16.0))
            .style(theme::drawer_link)
            .on_press(Message::DrawerLinkActivated(i))
            .into()
    });

    let footer = column![
        row![
            text(locale.get(Key::SettingsDarkMode)).size(14),
            Space::new().width(Fill),
            toggler(dark_mode).on_toggle(Message::UpdateDarkMode).size(24),
        ]
        .align_y(Alignment::Center),
        row![
            text(locale.get(Key::SettingsLanguage)).size(14),
            Space::new().width(Fill),
            button(text(locale.language.display_name()).size(14))
                .padding(Padding::new(6.0).left(12.0).right(12.0))
                .style(theme::icon_button)
                .on_press(Message::ToggleLanguage),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(12)
    .padding(Padding::new(16.0));

    let panel = container(
        column![
            row![
                text(locale.get(Key::AppName)).size(20),
                Space::new().width(Fill),
                hamburger(true),
            ]
            .align_y(Alignment::Center)
            .padding(Padding::new(16.0)),
            column(links.collect::<Vec<_>>()).spacing(4).padding(8),
            Space::new().height(Fill),
            footer,
        ]
        .width(Fill)
        .height(Fill),
    )
    .width(PANEL_WIDTH)
    .height(Fill)
    .style(theme::drawer_panel);

    let overlay = mouse_area(
        container(Space::new().width(Fill).height(Fill)).style(move |t| {
            let mut style = theme::drawer_overlay(t);
            if let Some(iced::Background::Color(c)) = &mut style.background {
                c.a *= progress;
            }
            style
        }),
    )
    .on_press(Message::DrawerClose);

    // Clipping a right-anchored strip to `progress` of the panel width makes
    // the panel emerge from the right edge as it animates open
    let visible = (PANEL_WIDTH * progress).max(1.0);

    iced::widget::stack![
        overlay,
        row![
            Space::new().width(Fill),
            // Presses on panel dead space must not reach the overlay below
            mouse_area(container(panel).width(visible).height(Fill).clip(true))
                .on_press(Message::Noop),
        ]
        .width(Fill)
        .height(Fill),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}
