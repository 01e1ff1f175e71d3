// ============================================================================
// GREENTECH WEB - Yew front end for the GreenTech sustainability platform
// ============================================================================
// - models:     wire types shared with the backend
// - services:   HTTP only (backend + ViaCEP)
// - state:      persisted session
// - viewmodels: pure UI logic, unit tested
// - hooks:      Yew state, timers, contexts
// - components / views: rendering
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod hooks;
pub mod utils;
pub mod components;
pub mod views;
pub mod app;

use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 GreenTech iniciando (API: {})", CONFIG.api_base_url);

    yew::Renderer::<app::App>::new().render();
}
