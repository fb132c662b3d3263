//! UI module for the showcase application
//!
//! # Architecture
//!
//! - **State machines** (`carousel`, `reveal`): rendering-free widget logic
//! - **Components** (`components`): page-specific views with Message wiring
//! - **Theme** (`theme`): dark/light palette and shared styles

pub mod carousel;
pub mod components;
pub mod icons;
pub mod reveal;
pub mod theme;
