//! Rendering the configuration into the document the external tool reads.
//!
//! The dev-server tool consumes a JSON options object with camelCase keys;
//! the serde renames on the config structs produce that shape directly.

use crate::config::Config;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Rendering/writing error.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write config file: {0}")]
    Write(#[from] std::io::Error),
}

/// Render the configuration as pretty-printed JSON.
///
/// Proxy rules serialize in prefix order (BTreeMap), so the output is stable
/// across runs and diffs cleanly.
pub fn to_json(config: &Config) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(config)?;
    out.push('\n');
    Ok(out)
}

/// Render the configuration and write it to the given path.
pub fn write_file(config: &Config, path: &Path) -> Result<(), RenderError> {
    let json = to_json(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_tool_key_spelling() {
        let json = to_json(&Config::default()).unwrap();

        assert!(json.contains("\"usePolling\": true"));
        assert!(json.contains("\"changeOrigin\": true"));
        assert!(json.contains("\"outDir\": \"dist\""));
        assert!(json.contains("\"/api\""));
        assert!(json.contains("\"http://backend:8000\""));
    }

    #[test]
    fn test_render_ends_with_newline() {
        let json = to_json(&Config::default()).unwrap();
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devserver.json");

        write_file(&Config::default(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json(&Config::default()).unwrap());
    }
}
