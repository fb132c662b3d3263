//! Application state definitions

use iced::animation::Animation;
use iced::time::Instant;

use crate::content;
use crate::i18n::Locale;
use crate::ui::carousel::Carousel;
use crate::ui::reveal::Reveals;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, locale, window geometry)
    pub core: CoreState,
    /// UI state (widgets, animations, scroll position)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: crate::features::Settings,
    pub locale: Locale,
    pub window_size: iced::Size,
    /// Last known cursor position; drag sessions open at this coordinate
    pub pointer_position: iced::Point,
}

impl CoreState {
    pub fn new(settings: crate::features::Settings, locale: Locale) -> Self {
        Self {
            settings,
            locale,
            window_size: iced::Size::new(1280.0, 900.0),
            pointer_position: iced::Point::ORIGIN,
        }
    }
}

/// In-flight hero slide transition (presentation only; the authoritative
/// position is always the carousel cursor)
pub struct SlideTransition {
    pub last: usize,
    pub direction: i32,
    pub animation: Animation<bool>,
}

impl SlideTransition {
    fn new() -> Self {
        Self {
            last: 0,
            direction: 1,
            animation: Animation::new(false),
        }
    }
}

/// Navigation drawer state
pub struct DrawerState {
    pub open: bool,
    pub animation: Animation<bool>,
}

impl DrawerState {
    fn new() -> Self {
        Self {
            open: false,
            animation: Animation::new(false),
        }
    }

    /// Whether the overlay should be in the widget tree at all
    pub fn visible(&self, now: Instant) -> bool {
        self.open || self.animation.is_animating(now)
    }

    /// Slide-in progress, 0.0 closed to 1.0 open
    pub fn progress(&self, now: Instant) -> f32 {
        self.animation.interpolate(0.0_f32, 1.0_f32, now)
    }
}

/// UI state
pub struct UiState {
    /// Hero slider state machine; `None` when there are no slides
    pub carousel: Option<Carousel>,
    pub slide_transition: SlideTransition,
    pub drawer: DrawerState,
    pub reveals: Reveals,
    /// Expanded flag per FAQ entry
    pub accordion_expanded: Vec<bool>,
    /// Current scroll offset of the page content
    pub scroll_top: f32,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            carousel: Carousel::new(content::SLIDES.len()),
            slide_transition: SlideTransition::new(),
            drawer: DrawerState::new(),
            reveals: Reveals::new(&content::reveal_layout()),
            accordion_expanded: vec![false; content::FAQS.len()],
            scroll_top: 0.0,
        }
    }

    /// Check if any animation is currently active
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.slide_transition.animation.is_animating(now)
            || self.drawer.animation.is_animating(now)
            || self.reveals.is_animating(now)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
