//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base address of the vaccination backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// How long a toast notification stays on screen
pub const TOAST_SECONDS: i64 = 5;

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "vaxadmin";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
