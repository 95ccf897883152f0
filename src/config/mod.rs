// ==========================================
// Pre-sale Unit Inventory - Import Configuration
// ==========================================
// Responsibility: runtime knobs for the import pipeline
// Source: environment variables with documented defaults; no config
// writes, no business logic
// ==========================================

use std::env;
use std::time::Duration;

/// Client-side size cap for uploaded import files.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024; // 10 MB

/// Runtime configuration of the import pipeline.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Base URL of the remote sales API, e.g. "https://api.example.vn/v1".
    pub api_base_url: String,
    /// Whole-request timeout for the create-many call.
    pub request_timeout: Duration,
    /// Maximum accepted import file size in bytes.
    pub max_file_bytes: u64,
    /// Tick interval of the cosmetic progress estimator.
    pub progress_tick: Duration,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            request_timeout: Duration::from_secs(30),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            progress_tick: Duration::from_millis(200),
        }
    }
}

impl ImportConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables:
    /// - `PRESALE_API_BASE_URL`
    /// - `PRESALE_API_TIMEOUT_SECS`
    /// - `PRESALE_MAX_FILE_BYTES`
    /// - `PRESALE_PROGRESS_TICK_MS`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: env::var("PRESALE_API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_timeout: env_u64("PRESALE_API_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            max_file_bytes: env_u64("PRESALE_MAX_FILE_BYTES").unwrap_or(defaults.max_file_bytes),
            progress_tick: env_u64("PRESALE_PROGRESS_TICK_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.progress_tick),
        }
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|v| v.trim().parse::<u64>().ok())
}
