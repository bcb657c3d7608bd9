use std::{env, time::Duration};

/// User id used when none is configured.
pub const DEFAULT_USER_ID: &str = "demo_user";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// User whose events are loaded (default: demo_user)
    pub user_id: String,
    /// Base URL of the HTTP backend; the mock backend is used when unset
    pub backend_url: Option<String>,
    /// Simulated sync delay in milliseconds (default: 1,000)
    pub sync_delay_ms: u64,
    /// Simulated latency of the mock backend in milliseconds (default: 0)
    pub mock_latency_ms: u64,
    /// Bearer token sent to the HTTP backend (default: none)
    pub api_token: Option<String>,
    /// Answer used by the console host when it cannot prompt (default: false)
    pub confirm_default: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `M2_USER_ID` - User whose events are loaded (default: demo_user)
    /// - `M2_BACKEND_URL` - HTTP backend base URL (default: unset, mock backend)
    /// - `M2_SYNC_DELAY_MS` - Simulated sync delay (default: 1000)
    /// - `M2_MOCK_LATENCY_MS` - Mock backend latency (default: 0)
    /// - `M2_API_TOKEN` - HTTP backend bearer token (default: unset)
    /// - `M2_CONFIRM_DEFAULT` - `true`/`false` answer for non-interactive confirms (default: false)
    pub fn from_env() -> Self {
        Self {
            user_id: env::var("M2_USER_ID")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            backend_url: env::var("M2_BACKEND_URL").ok().filter(|v| !v.is_empty()),
            sync_delay_ms: env::var("M2_SYNC_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            mock_latency_ms: env::var("M2_MOCK_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            api_token: env::var("M2_API_TOKEN").ok().filter(|v| !v.is_empty()),
            confirm_default: env::var("M2_CONFIRM_DEFAULT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Get the sync delay as a Duration.
    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.sync_delay_ms)
    }

    /// Get the mock backend latency as a Duration.
    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
