//! Dev-server network and file-watching configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::hmr::HmrConfig;
use super::proxy::ProxyRule;

/// Dev-server settings: bind address, watcher, hot reload, and proxying.
///
/// Field names follow the consuming tool's camelCase convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Bind address for the dev server.
    pub host: String,
    /// Bind port for the dev server.
    pub port: u16,
    /// File-watcher settings.
    pub watch: WatchConfig,
    /// Hot-module-reload endpoint advertised to clients.
    pub hmr: HmrConfig,
    /// Request-forwarding rules keyed by path prefix.
    pub proxy: BTreeMap<String, ProxyRule>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let mut proxy = BTreeMap::new();
        proxy.insert("/api".to_string(), ProxyRule::default_api());
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5173,
            watch: WatchConfig::default(),
            hmr: HmrConfig::default(),
            proxy,
        }
    }
}

/// File-watcher settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WatchConfig {
    /// Poll for changes instead of relying on OS file events.
    /// Required for bind mounts under Docker on Windows/Mac.
    pub use_polling: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig { use_polling: true }
    }
}
