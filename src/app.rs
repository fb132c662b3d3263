//! Main application module

pub mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Key, Language, Locale};
use crate::ui::carousel::AUTOPLAY_INTERVAL;
pub use message::Message;
pub use state::{App, CoreState, DrawerState, SlideTransition, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let locale = {
            let lang = if settings.display.language == "en" {
                Language::English
            } else {
                Language::Japanese
            };
            Locale::new(lang)
        };

        // 2. Initialize sub-states
        let core = CoreState::new(settings, locale);
        let mut ui = UiState::new();

        // Cards already inside the initial viewport reveal right away
        ui.reveals
            .on_viewport_change(0.0, core.window_size.height, iced::time::Instant::now());

        if ui.carousel.is_none() {
            tracing::warn!("no hero slides configured, slider disabled");
        }

        (Self { core, ui }, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for autoplay, animations, keyboard, pointer, and resize
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::Instant;

        let now = Instant::now();
        let power_saving = self.core.settings.display.power_saving_mode;

        // 1. Hero autoplay. The subscription identity is the autoplay epoch:
        //    a restart tears the old interval stream down before the new one
        //    starts, so there is never a second live timer and the phase
        //    resets on every user action.
        let carousel = self.ui.carousel.as_ref();
        let autoplay_sub = if subscription_logic::needs_autoplay_subscription(
            carousel.is_some(),
            carousel.is_some_and(|c| c.autoplay_running()),
        ) {
            let epoch = carousel.map(|c| c.autoplay_epoch()).unwrap_or(0);
            iced::Subscription::run_with(epoch, autoplay_stream)
        } else {
            iced::Subscription::none()
        };

        // 2. Animation frames (~60fps while something animates)
        let animation_sub = if subscription_logic::needs_frame_subscription(
            power_saving,
            self.ui.has_active_animations(now),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Keyboard events (Escape closes the drawer, arrows navigate)
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 4. Window resize keeps the projection and breakpoint logic current
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 5. Pointer and touch events. Moves are tracked globally so a drag
        //    that leaves the slider region keeps updating its delta, exactly
        //    like listening on the window instead of the element.
        let pointer_sub = iced::event::listen().filter_map(|event| match event {
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                Some(Message::PointerReleased)
            }
            iced::Event::Touch(iced::touch::Event::FingerPressed { position, .. }) => {
                Some(Message::TouchStarted(position))
            }
            iced::Event::Touch(iced::touch::Event::FingerMoved { position, .. }) => {
                Some(Message::TouchMoved(position))
            }
            iced::Event::Touch(iced::touch::Event::FingerLifted { .. }) => {
                Some(Message::TouchEnded)
            }
            iced::Event::Touch(iced::touch::Event::FingerLost { .. }) => Some(Message::TouchLost),
            _ => None,
        });

        iced::Subscription::batch([
            autoplay_sub,
            animation_sub,
            keyboard_sub,
            resize_sub,
            pointer_sub,
        ])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Repeating autoplay tick stream; one item per interval after creation
fn autoplay_stream(_epoch: &u64) -> impl iced::futures::Stream<Item = Message> + use<> {
    iced::futures::stream::unfold((), |_| async {
        tokio::time::sleep(AUTOPLAY_INTERVAL).await;
        Some((Message::SliderTick, ()))
    })
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// The autoplay timer exists only for a mounted slider that is running
    pub fn needs_autoplay_subscription(mounted: bool, running: bool) -> bool {
        mounted && running
    }

    /// Frame subscription runs while animations are active, unless power
    /// saving suppresses it
    pub fn needs_frame_subscription(power_saving: bool, animating: bool) -> bool {
        !power_saving && animating
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_autoplay_lifecycle {
        use super::*;

        #[test]
        fn unmounted_slider_never_schedules() {
            assert!(
                !needs_autoplay_subscription(false, true),
                "no timer may exist without a mounted slider"
            );
        }

        #[test]
        fn stopped_slider_never_schedules() {
            assert!(
                !needs_autoplay_subscription(true, false),
                "hover or drag must fully suspend the timer"
            );
        }

        #[test]
        fn running_slider_schedules_exactly_one_timer() {
            assert!(needs_autoplay_subscription(true, true));
        }
    }

    mod property_frame_subscription {
        use super::*;

        #[test]
        fn frames_run_only_while_animating() {
            assert!(needs_frame_subscription(false, true));
            assert!(!needs_frame_subscription(false, false));
        }

        #[test]
        fn power_saving_suppresses_frames() {
            assert!(
                !needs_frame_subscription(true, true),
                "power saving mode must not burn vsync frames"
            );
        }

        #[test]
        fn frame_and_autoplay_decisions_are_independent() {
            // Animation state never touches the autoplay timer and vice versa
            assert!(needs_autoplay_subscription(true, true));
            assert!(!needs_frame_subscription(false, false));
        }
    }
}
