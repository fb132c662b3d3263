//! Application messages

use iced::keyboard::{Key, Modifiers};

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (drawer backdrop clicks)
    Noop,

    // ============ Hero slider ============
    /// Autoplay timer fired
    SliderTick,
    /// Arrow navigation, user-initiated (±1)
    SliderNavigate(i32),
    /// Indicator dot clicked
    SliderGoTo(usize),
    /// Pointer or focus entered the slider region
    SliderHoverEnter,
    /// Pointer or focus left the slider region
    SliderHoverLeave,
    /// Mouse pressed inside the slider (drag session opens at the tracked
    /// pointer position)
    SliderPressed,
    /// Mouse moved (tracked globally for drag deltas)
    PointerMoved(iced::Point),
    /// Mouse released anywhere (ends a drag session if one is open)
    PointerReleased,
    /// Finger down
    TouchStarted(iced::Point),
    /// Finger moved
    TouchMoved(iced::Point),
    /// Finger lifted
    TouchEnded,
    /// Touch tracking lost by the system
    TouchLost,

    // ============ Drawer ============
    /// Hamburger toggled
    DrawerToggle,
    /// Close the drawer (overlay click, Escape, breakpoint crossing)
    DrawerClose,
    /// Drawer navigation link activated
    DrawerLinkActivated(usize),

    // ============ Accordion ============
    /// FAQ entry header clicked
    AccordionToggle(usize),

    // ============ Page ============
    /// Content scrolled (y offset in pixels)
    ContentScrolled(f32),
    /// Window resized
    WindowResized(iced::Size),
    /// Keyboard input
    KeyPressed(Key, Modifiers),
    /// Animation frame (vsync rate while something animates)
    AnimationTick,

    // ============ Settings ============
    /// Dark mode toggled from the drawer footer
    UpdateDarkMode(bool),
    /// Cycle the UI language
    ToggleLanguage,
}

// Manual Debug implementation keeps high-frequency messages cheap to format
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::Noop => simple!("Noop"),
            Self::SliderTick => simple!("SliderTick"),
            Self::SliderNavigate(d) => simple!("SliderNavigate", "{}", d),
            Self::SliderGoTo(i) => simple!("SliderGoTo", "{}", i),
            Self::SliderHoverEnter => simple!("SliderHoverEnter"),
            Self::SliderHoverLeave => simple!("SliderHoverLeave"),
            Self::SliderPressed => simple!("SliderPressed"),
            Self::PointerMoved(p) => simple!("PointerMoved", "{:.0},{:.0}", p.x, p.y),
            Self::PointerReleased => simple!("PointerReleased"),
            Self::TouchStarted(p) => simple!("TouchStarted", "{:.0},{:.0}", p.x, p.y),
            Self::TouchMoved(p) => simple!("TouchMoved", "{:.0},{:.0}", p.x, p.y),
            Self::TouchEnded => simple!("TouchEnded"),
            Self::TouchLost => simple!("TouchLost"),
            Self::DrawerToggle => simple!("DrawerToggle"),
            Self::DrawerClose => simple!("DrawerClose"),
            Self::DrawerLinkActivated(i) => simple!("DrawerLinkActivated", "{}", i),
            Self::AccordionToggle(i) => simple!("AccordionToggle", "{}", i),
            Self::ContentScrolled(y) => simple!("ContentScrolled", "{:.0}", y),
            Self::WindowResized(s) => simple!("WindowResized", "{:.0}x{:.0}", s.width, s.height),
            Self::KeyPressed(key, _) => simple!("KeyPressed", "{:?}", key),
            Self::AnimationTick => simple!("AnimationTick"),
            Self::UpdateDarkMode(on) => simple!("UpdateDarkMode", "{}", on),
            Self::ToggleLanguage => simple!("ToggleLanguage"),
        }
    }
}
