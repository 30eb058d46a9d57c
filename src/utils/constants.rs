//! Constants Module - Single Source of Truth
//!
//! Every fixed value of the API target and the probe lives here.
//! Other modules import these instead of repeating literals.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "reqres_basics";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for probe requests
pub const USER_AGENT: &str = concat!("reqres_basics/", env!("CARGO_PKG_VERSION"));

// ============================================
// API TARGET
// ============================================

/// Service root address
pub const BASE_URL: &str = "https://reqres.in";

/// Path of the users listing
pub const END_POINT: &str = "/api/users";

/// Status the endpoint is expected to answer with
pub const STATUS_CODE: u16 = 200;

// ============================================
// PROBE CONSTANTS
// ============================================

/// Default timeout for probe requests (seconds)
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Env var overriding the base URL for the probe
pub const ENV_BASE_URL: &str = "REQRES_BASE_URL";

/// Env var overriding the probe timeout
pub const ENV_TIMEOUT_SECS: &str = "REQRES_TIMEOUT_SECS";
