//! Session service configuration.

use std::env;

use common::LatencyConfig;

/// Session service configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionServiceConfig {
    /// Simulated latency of login, profile and password operations
    pub latency: LatencyConfig,
}

impl SessionServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = LatencyConfig::default();

        Self {
            latency: LatencyConfig {
                login_ms: millis("PORTAL_LOGIN_DELAY_MS").unwrap_or(defaults.login_ms),
                profile_ms: millis("PORTAL_PROFILE_DELAY_MS").unwrap_or(defaults.profile_ms),
                password_ms: millis("PORTAL_PASSWORD_DELAY_MS").unwrap_or(defaults.password_ms),
            },
        }
    }
}

fn millis(var: &str) -> Option<u64> {
    env::var(var).ok().and_then(|v| v.parse().ok())
}
