//! Hero slider component
//!
//! Renders the slide track from the carousel's pure projection, plus arrow
//! buttons, indicator dots, and the mouse area that feeds hover and drag
//! events back into the state machine.

use iced::widget::{Space, button, canvas, container, mouse_area, row, stack, svg};
use iced::{
    Alignment, Color, Element, Fill, Padding, Point, Rectangle, Renderer, Size, Theme, mouse,
};

use crate::app::Message;
use crate::content::{self, Slide};
use crate::i18n::Locale;
use crate::ui::carousel::Carousel;
use crate::ui::theme;

const INDICATOR_SIZE: f32 = 8.0;
const INDICATOR_SPACING: f32 = 8.0;

/// Canvas program drawing the slide track at the projected offset,
/// easing between the previous and current cursor positions
struct TrackDrawer<'a> {
    slides: &'a [Slide],
    locale: Locale,
    current: usize,
    last: usize,
    progress: f32,
    direction: i32,
}

impl<'a, Message> canvas::Program<Message> for TrackDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let draw_slide = |frame: &mut canvas::Frame, slide: &Slide, offset_x: f32| {
            frame.fill_rectangle(
                Point::new(offset_x, 0.0),
                Size::new(bounds.width, bounds.height),
                slide.tint,
            );
            // Bottom gradient band keeps the copy readable on any tint
            frame.fill_rectangle(
                Point::new(offset_x, bounds.height * 0.65),
                Size::new(bounds.width, bounds.height * 0.35),
                theme::banner_gradient_bottom(),
            );
            frame.fill_text(canvas::Text {
                content: self.locale.get(slide.title).to_string(),
                position: Point::new(offset_x + 40.0, bounds.height - 96.0),
                color: Color::WHITE,
                size: iced::Pixels(32.0),
                align_y: iced::alignment::Vertical::Bottom,
                ..canvas::Text::default()
            });
            frame.fill_text(canvas::Text {
                content: self.locale.get(slide.subtitle).to_string(),
                position: Point::new(offset_x + 40.0, bounds.height - 56.0),
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.85),
                size: iced::Pixels(16.0),
                align_y: iced::alignment::Vertical::Bottom,
                ..canvas::Text::default()
            });
        };

        let current = &self.slides[self.current];
        if self.progress >= 1.0 || self.current == self.last {
            draw_slide(&mut frame, current, 0.0);
        } else {
            let width = bounds.width;
            // Ease out cubic for smoother feel
            let eased = 1.0 - (1.0 - self.progress).powi(3);

            let (last_offset, current_offset) = if self.direction > 0 {
                (-width * eased, width * (1.0 - eased))
            } else {
                (width * eased, -width * (1.0 - eased))
            };

            draw_slide(&mut frame, &self.slides[self.last], last_offset);
            draw_slide(&mut frame, current, current_offset);
        }

        vec![frame.into_geometry()]
    }
}

/// Build the hero slider.
///
/// `last`, `animation`, and `direction` describe the in-flight slide
/// transition; the authoritative position is `carousel.projection()`.
pub fn view<'a>(
    carousel: &'a Carousel,
    last: usize,
    animation: &'a iced::animation::Animation<bool>,
    direction: i32,
    locale: Locale,
) -> Element<'a, Message> {
    let projection = carousel.projection();

    let now = iced::time::Instant::now();
    let progress = animation.interpolate(0.0_f32, 1.0_f32, now);

    let track: Element<'_, Message> = canvas(TrackDrawer {
        slides: content::SLIDES,
        locale,
        current: projection.active,
        last,
        progress,
        direction,
    })
    .width(Fill)
    .height(content::HERO_HEIGHT)
    .into();

    // Navigation arrows
    let left_arrow = button(
        svg(svg::Handle::from_memory(
            crate::ui::icons::CHEVRON_LEFT.as_bytes(),
        ))
        .width(24)
        .height(24)
        .style(|_theme, _status| svg::Style {
            color: Some(Color::WHITE),
        }),
    )
    .padding(12)
    .style(theme::carousel_nav_button)
    .on_press(Message::SliderNavigate(-1));

    let right_arrow = button(
        svg(svg::Handle::from_memory(
            crate::ui::icons::CHEVRON_RIGHT.as_bytes(),
        ))
        .width(24)
        .height(24)
        .style(|_theme, _status| svg::Style {
            color: Some(Color::WHITE),
        }),
    )
    .padding(12)
    .style(theme::carousel_nav_button)
    .on_press(Message::SliderNavigate(1));

    // Indicator dots, one per slide, click-to-navigate
    let indicators: Element<'_, Message> = row((0..projection.len)
        .map(|i| {
            button(Space::new().width(INDICATOR_SIZE).height(INDICATOR_SIZE))
                .padding(0)
                .style(theme::indicator_dot(projection.is_active(i)))
                .on_press(Message::SliderGoTo(i))
                .into()
        })
        .collect::<Vec<_>>())
    .spacing(INDICATOR_SPACING)
    .align_y(Alignment::Center)
    .into();

    let indicator_row = row![Space::new().width(Fill), indicators, Space::new().width(Fill)]
        .padding(Padding::new(0.0).bottom(16.0));

    let nav_overlay = row![
        container(left_arrow)
            .height(content::HERO_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(8.0)),
        Space::new().width(Fill),
        container(right_arrow)
            .height(content::HERO_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(8.0)),
    ]
    .width(Fill)
    .height(content::HERO_HEIGHT);

    let dots_overlay = iced::widget::column![Space::new().height(Fill), indicator_row]
        .width(Fill)
        .height(content::HERO_HEIGHT);

    let stacked = stack![track, dots_overlay, nav_overlay]
        .width(Fill)
        .height(content::HERO_HEIGHT);

    // Hover suspends autoplay; press opens a drag session at the tracked
    // pointer position. Releases arrive globally via the event subscription.
    mouse_area(
        container(stacked)
            .width(Fill)
            .height(content::HERO_HEIGHT)
            .style(theme::hero_banner),
    )
    .on_enter(Message::SliderHoverEnter)
    .on_exit(Message::SliderHoverLeave)
    .on_press(Message::SliderPressed)
    .interaction(mouse::Interaction::Grab)
    .into()
}
