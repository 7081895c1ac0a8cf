//! Cryptog Admin - contest management dashboard
//!
//! Desktop shell for the Cryptog contest page. All contest state is held in
//! memory and discarded on exit.

use std::rc::Rc;

use cryptog_core::DashboardConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod state;
mod viewmodel;

slint::include_modules!();

fn main() {
    // Config first: it may carry the log filter
    let config = DashboardConfig::load_default();
    init_logging(config.as_ref().ok().and_then(|c| c.log_filter.as_deref()));

    tracing::info!("Starting Cryptog Admin");

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = match state::AppState::new(config) {
        Ok(state) => Rc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize contest page: {}", e);
            std::process::exit(1);
        }
    };

    let main_window = match MainWindow::new() {
        Ok(window) => window,
        Err(e) => {
            tracing::error!("Failed to create main window: {}", e);
            std::process::exit(1);
        }
    };

    viewmodel::setup_bindings(&main_window, app_state);

    if let Err(e) = main_window.run() {
        tracing::error!("Event loop failed: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or("info")));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}
