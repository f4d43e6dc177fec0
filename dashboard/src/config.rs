//! ==============================================================================
//! config.rs - build-time settings
//! ==============================================================================
//!
//! the dashboard is a static bundle, so settings are fixed at compile time:
//!     WEBSITES_API_BASE   base url of the websites api (default "/api")
//!
//! ==============================================================================

/// base url for every api call, without trailing slash
pub const API_BASE: &str = match option_env!("WEBSITES_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// how long auto-dismissing toasts stay on screen
pub const TOAST_DISMISS_MS: u64 = 5_000;

/// console log level
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
