//! Application features
//!
//! Cross-cutting functionality that is not tied to a single page.

pub mod settings;

pub use settings::{DisplaySettings, Settings, SettingsError};
