//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Content type assumed when an endpoint leaves it unset
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Timeout applied to every outbound request
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "apidock";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
