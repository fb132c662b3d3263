//! Page components with Message wiring

pub mod accordion;
pub mod drawer;
pub mod hero_slider;
pub mod reveal_card;
pub mod section_header;
