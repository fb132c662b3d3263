//! Application view rendering

use iced::widget::{Space, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::Message;
use crate::content;
use crate::i18n::Key;
use crate::ui::components::{accordion, drawer, hero_slider, reveal_card, section_header};
use crate::ui::theme;

impl App {
    /// Build the page view
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let now = iced::time::Instant::now();

        // Fixed header: brand + hamburger
        let header = container(
            row![
                text(locale.get(Key::AppName)).size(22),
                Space::new().width(Fill),
                drawer::hamburger(false),
            ]
            .align_y(Alignment::Center)
            .padding(Padding::new(8.0).left(24.0).right(16.0)),
        )
        .width(Fill)
        .height(content::HEADER_HEIGHT)
        .style(theme::main_content);

        // Hero slider; a missing slide set degrades to an empty band
        let hero: Element<'_, Message> = if let Some(carousel) = &self.ui.carousel {
            let transition = &self.ui.slide_transition;
            hero_slider::view(
                carousel,
                transition.last,
                &transition.animation,
                transition.direction,
                locale,
            )
        } else {
            Space::new().width(Fill).height(0).into()
        };

        // Services row: three reveal cards sharing the first reveal indices
        let services = row(content::SERVICES
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let inner: Element<'_, Message> = column![
                    text(locale.get(card.title)).size(18),
                    text(locale.get(card.body)).size(14).style(|theme| {
                        text::Style {
                            color: Some(theme::text_secondary(theme)),
                        }
                    }),
                ]
                .spacing(10)
                .into();
                reveal_card::wrap(
                    inner,
                    self.ui.reveals.progress(i, now),
                    content::SERVICE_CARD_HEIGHT,
                )
            })
            .collect::<Vec<_>>())
        .spacing(content::CARD_SPACING)
        .width(Fill);

        // Pickup features: full-width split cards
        let pickups = column(content::PICKUPS
            .iter()
            .enumerate()
            .map(|(i, feature)| {
                let inner: Element<'_, Message> = row![
                    container(Space::new().width(160).height(Fill)).style(move |_t| {
                        iced::widget::container::Style {
                            background: Some(iced::Background::Color(feature.tint)),
                            border: iced::Border {
                                radius: 8.0.into(),
                                ..Default::default()
                            },
                            ..Default::default()
                        }
                    }),
                    column![
                        text(locale.get(feature.title)).size(18),
                        text(locale.get(feature.body)).size(14).style(|theme| {
                            text::Style {
                                color: Some(theme::text_secondary(theme)),
                            }
                        }),
                    ]
                    .spacing(10),
                ]
                .spacing(20)
                .into();
                reveal_card::wrap(
                    inner,
                    self.ui.reveals.progress(content::SERVICES.len() + i, now),
                    content::PICKUP_CARD_HEIGHT,
                )
            })
            .collect::<Vec<_>>())
        .spacing(content::CARD_SPACING)
        .width(Fill);

        // FAQ accordion
        let faqs = column(
            content::FAQS
                .iter()
                .enumerate()
                .map(|(i, faq)| {
                    accordion::entry(
                        i,
                        faq,
                        self.ui.accordion_expanded.get(i).copied().unwrap_or(false),
                        locale,
                    )
                })
                .collect::<Vec<_>>(),
        )
        .spacing(12)
        .width(Fill);

        let contact = container(
            text(locale.get(Key::NavContact)).size(16).style(|theme| {
                text::Style {
                    color: Some(theme::text_muted(theme)),
                }
            }),
        )
        .width(Fill)
        .height(240)
        .center_x(Fill)
        .align_y(iced::alignment::Vertical::Center);

        let page = column![
            hero,
            section_header::view(Key::SectionServices, locale),
            services,
            section_header::view(Key::SectionPickup, locale),
            pickups,
            section_header::view(Key::SectionFaq, locale),
            faqs,
            contact,
        ]
        .width(Fill)
        .padding(Padding::new(0.0).left(32.0).right(32.0));

        let page_scroll = scrollable(page)
            .width(Fill)
            .height(Fill)
            .id(iced::widget::Id::new("page_scroll"))
            .on_scroll(|viewport| {
                let offset = viewport.absolute_offset();
                Message::ContentScrolled(offset.y)
            });

        let base = container(column![header, page_scroll].width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Drawer overlay only enters the tree while open or animating
        if self.ui.drawer.visible(now) {
            let overlay = drawer::view(
                self.ui.drawer.progress(now),
                locale,
                self.core.settings.display.dark_mode,
            );
            stack![base, overlay].width(Fill).height(Fill).into()
        } else {
            base.into()
        }
    }
}
