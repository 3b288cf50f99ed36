//! Configuration loading and validation for the dev-server tooling.
//!
//! Uses serde_yaml to load the YAML configuration file, with environment
//! variable overrides for deployment-specific values. Every field carries a
//! default matching the stock frontend setup, so an absent file or an empty
//! file both yield a working configuration.

mod build;
mod error;
mod hmr;
mod proxy;
mod server;
mod url;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use hmr::HmrConfig;
pub use proxy::ProxyRule;
pub use server::{ServerConfig, WatchConfig};
pub use url::{Scheme, TargetUrl};

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::{env, fs};
use tracing::debug;

/// Root configuration consumed by the external dev-server/build tool.
///
/// The value is produced once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Dev-server settings: bind address, watcher, HMR, proxy rules.
    pub server: ServerConfig,
    /// Production build settings.
    pub build: BuildConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` (if present). A missing
    /// config file is not an error: the built-in defaults stand in, matching
    /// how the consuming tool treats an absent options file. Environment
    /// overrides (`DEVSERVER_*`) are applied on top, then the result is
    /// validated.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let mut config = if Path::new(path).exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        } else {
            debug!(path, "config file not found, using defaults");
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply `DEVSERVER_*` environment overrides.
    ///
    /// A present but malformed value is an error; startup must not continue
    /// on a half-applied configuration.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(host) = override_var::<String>("DEVSERVER_HOST")? {
            self.server.host = host;
        }
        if let Some(port) = override_var("DEVSERVER_PORT")? {
            self.server.port = port;
        }
        if let Some(polling) = override_var("DEVSERVER_WATCH_POLLING")? {
            self.server.watch.use_polling = polling;
        }
        if let Some(host) = override_var::<String>("DEVSERVER_HMR_HOST")? {
            self.server.hmr.host = host;
        }
        if let Some(port) = override_var("DEVSERVER_HMR_PORT")? {
            self.server.hmr.port = port;
        }
        if let Some(target) = override_var::<TargetUrl>("DEVSERVER_PROXY_TARGET")? {
            // One backend, so the override rewrites every rule's target
            for rule in self.server.proxy.values_mut() {
                rule.target = target.clone();
            }
        }
        if let Some(out_dir) = override_var::<String>("DEVSERVER_BUILD_OUT_DIR")? {
            self.build.out_dir = out_dir;
        }
        if let Some(sourcemap) = override_var("DEVSERVER_BUILD_SOURCEMAP")? {
            self.build.sourcemap = sourcemap;
        }
        Ok(())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation("server.host is required".into()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be a valid TCP port (1-65535)".into(),
            ));
        }
        if self.server.hmr.host.is_empty() {
            return Err(ConfigError::Validation(
                "server.hmr.host is required".into(),
            ));
        }
        if self.server.hmr.port == 0 {
            return Err(ConfigError::Validation(
                "server.hmr.port must be a valid TCP port (1-65535)".into(),
            ));
        }

        for prefix in self.server.proxy.keys() {
            if prefix.is_empty() {
                return Err(ConfigError::Validation(
                    "proxy rule prefix must not be empty".into(),
                ));
            }
            if !prefix.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "proxy rule prefix {} must start with /",
                    prefix
                )));
            }
        }

        if self.build.out_dir.is_empty() {
            return Err(ConfigError::Validation("build.outDir is required".into()));
        }
        if Path::new(&self.build.out_dir).is_absolute() {
            return Err(ConfigError::Validation(format!(
                "build.outDir {} must be a relative path",
                self.build.out_dir
            )));
        }

        Ok(())
    }
}

/// Read and parse a single environment override.
///
/// Absent variables are `Ok(None)`; present ones must parse.
fn override_var<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Override {
                var: var.to_string(),
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
