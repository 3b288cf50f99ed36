//! Build output configuration.

use serde::{Deserialize, Serialize};

/// Settings for the production build step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    /// Destination directory for build artifacts, relative to the project root.
    pub out_dir: String,
    /// Emit debug source maps alongside the artifacts.
    pub sourcemap: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            out_dir: "dist".to_string(),
            sourcemap: true,
        }
    }
}
