// ============================================================================
// LAUNCH GLOBE - Upcoming launch sites on an interactive 3D globe
// ============================================================================
// - models: Launch records and coordinates
// - maps: globe lifecycle, marker sync, visibility and idle rotation,
//         written against a platform trait (Mapbox GL JS on wasm32)
// - services: Launch Library 2 client
// - components: Yew UI (wasm32 only)
// ============================================================================

pub mod config;
pub mod models;
pub mod maps;
pub mod notifications;
pub mod services;

#[cfg(target_arch = "wasm32")]
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod components;

/// Browser entry point: panic hook, logging, then mount the Yew app
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use crate::config::CONFIG;

    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Launch Globe starting ({})", CONFIG.environment);

    yew::Renderer::<components::App>::new().render();
}
