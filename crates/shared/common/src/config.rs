//! Shared configuration structures.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What `initialize()` does with collections that are already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPolicy {
    /// Replace every collection with the seed on each load (demo reset)
    #[default]
    Overwrite,
    /// Only write collections whose key is absent
    IfMissing,
}

impl FromStr for SeedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Ok(SeedPolicy::Overwrite),
            "if-missing" | "if_missing" => Ok(SeedPolicy::IfMissing),
            other => Err(format!("unknown seed policy: {}", other)),
        }
    }
}

impl std::fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedPolicy::Overwrite => write!(f, "overwrite"),
            SeedPolicy::IfMissing => write!(f, "if-missing"),
        }
    }
}

/// Which storage port implementation backs the persistent store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

/// Artificial latency of the session operations, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub profile_ms: u64,
    pub password_ms: u64,
}

impl LatencyConfig {
    /// No delays at all (tests, scripted runs)
    pub fn immediate() -> Self {
        Self {
            login_ms: 0,
            profile_ms: 0,
            password_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn profile(&self) -> Duration {
        Duration::from_millis(self.profile_ms)
    }

    pub fn password(&self) -> Duration {
        Duration::from_millis(self.password_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            profile_ms: 800,
            password_ms: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_policy_parsing() {
        assert_eq!("overwrite".parse(), Ok(SeedPolicy::Overwrite));
        assert_eq!("If-Missing".parse(), Ok(SeedPolicy::IfMissing));
        assert!("keep".parse::<SeedPolicy>().is_err());
        assert_eq!(SeedPolicy::default(), SeedPolicy::Overwrite);
        assert_eq!(SeedPolicy::IfMissing.to_string(), "if-missing");
    }

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!("MEMORY".parse(), Ok(StorageBackend::Memory));
        assert_eq!("redis".parse(), Ok(StorageBackend::Redis));
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_latency_defaults() {
        let latency = LatencyConfig::default();
        assert_eq!(latency.login(), Duration::from_secs(1));
        assert_eq!(LatencyConfig::immediate().profile(), Duration::ZERO);
    }
}
