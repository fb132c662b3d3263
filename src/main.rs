//! Vitrine - A promotional showcase desktop application
//! Built with iced: hero slider, navigation drawer, reveal cards, FAQ

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod content;
mod features;
mod i18n;
mod ui;

use once_cell::sync::OnceCell;

/// One-shot initialization guard; a second startup attempt in the same
/// process (e.g. from an embedding host) is a logged no-op
static INITIALIZED: OnceCell<()> = OnceCell::new();

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    if INITIALIZED.set(()).is_err() {
        tracing::warn!("vitrine already initialized, ignoring second startup");
        return Ok(());
    }

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(1280.0, 900.0))
        .antialiasing(true)
        .run()
}
