//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files,
//! and every struct carries a `Default` so a minimal (or absent) config
//! still produces a runnable service.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the lookup front end.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Live lookup backend settings.
    pub lookup: LookupConfig,

    /// Static asset mount directories.
    pub static_assets: StaticAssetsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Total time bound for handling one request, in seconds.
    pub request_timeout_secs: u64,
}

impl ListenerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Live lookup backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the ballot lookup backend.
    pub base_url: String,

    /// Time bound for a single lookup call in milliseconds.
    /// Exceeding it triggers the failover response.
    pub timeout_ms: u64,
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9000/api/".to_string(),
            timeout_ms: 3_000,
        }
    }
}

/// Static asset mount points, served as opaque passthroughs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticAssetsConfig {
    /// Directory mounted at /themes.
    pub themes_dir: String,

    /// Directory mounted at /static.
    pub static_dir: String,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            themes_dir: "./themes".to_string(),
            static_dir: "./static".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
