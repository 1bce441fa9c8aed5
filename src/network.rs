//! Network URL constants for the Veritas backend.

/// Default REST API base URL (hosted backend).
pub const DEFAULT_API_URL: &str = "https://veritas-backend-production.up.railway.app";

/// Local development backend.
pub const LOCAL_API_URL: &str = "http://localhost:5050";

/// Environment variable read by `VeritasClientBuilder::from_env`.
pub const API_URL_ENV: &str = "VERITAS_API_URL";

/// Environment variable holding the poll interval in whole seconds.
pub const POLL_INTERVAL_ENV: &str = "VERITAS_POLL_INTERVAL_SECS";

/// Logo service used by the ticker strip.
pub const LOGO_BASE_URL: &str = "https://logo.clearbit.com";
