// DuoCal - shared two-person calendar client
// Main entry point for the iced application

use std::sync::Arc;

use anyhow::Context;
use iced::{Application, Settings as IcedSettings};
use log::info;

use duocal::app::DuoCalApp;
use duocal::utils::logging;
use duocal::{AppConfig, CalendarApi};

fn build_api() -> anyhow::Result<CalendarApi> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    CalendarApi::new(&config).context("failed to build the HTTP client")
}

#[tokio::main]
async fn main() -> iced::Result {
    if let Err(e) = logging::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting DuoCal");

    let api = match build_api() {
        Ok(api) => Arc::new(api),
        Err(e) => {
            logging::log_error_with_context(&e, "startup");
            eprintln!("Failed to start: {}", e);
            eprintln!("Check DUOCAL_API_URL and try again.");
            std::process::exit(1);
        }
    };

    DuoCalApp::run(IcedSettings {
        flags: api,
        window: iced::window::Settings {
            size: iced::Size::new(1100.0, 760.0),
            resizable: true,
            ..Default::default()
        },
        id: None,
        fonts: vec![],
        default_font: Default::default(),
        default_text_size: iced::Pixels(16.0),
        antialiasing: false,
    })
}
