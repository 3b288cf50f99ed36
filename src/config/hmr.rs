//! Hot-module-reload endpoint configuration.

use serde::{Deserialize, Serialize};

/// Endpoint advertised to browser clients for the hot-reload channel.
///
/// Distinct from the bind address: inside a container the server binds
/// `0.0.0.0` while clients connect to a host-visible name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HmrConfig {
    /// Hostname clients use for the hot-reload channel.
    pub host: String,
    /// Port clients use for the hot-reload channel.
    pub port: u16,
}

impl Default for HmrConfig {
    fn default() -> Self {
        HmrConfig {
            host: "localhost".to_string(),
            port: 5173,
        }
    }
}
