//! Proxy target origins: `http://host`, `https://host:port`.
//!
//! The consuming tool only forwards to an origin, so a target with a path,
//! query, or userinfo is rejected up front instead of being silently
//! truncated later.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// URL scheme accepted for proxy targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// A validated proxy target origin.
///
/// Keeps the original string so the value the tool receives is exactly the
/// value that was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    raw: String,
    scheme: Scheme,
    host: String,
    port: Option<u16>,
}

impl TargetUrl {
    /// Parse an origin of the form `scheme://host[:port]`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("proxy target is empty".to_string());
        }

        let (scheme, rest) = if let Some(rest) = s.strip_prefix("http://") {
            (Scheme::Http, rest)
        } else if let Some(rest) = s.strip_prefix("https://") {
            (Scheme::Https, rest)
        } else {
            return Err(format!(
                "proxy target {} must start with http:// or https://",
                s
            ));
        };

        // Trailing slash is tolerated, anything beyond that is not an origin
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.contains('/') || rest.contains('?') || rest.contains('#') || rest.contains('@') {
            return Err(format!("proxy target {} must be a bare origin", s));
        }

        let (host, port) = match rest.split_once(':') {
            Some((host, port_str)) => {
                let port: u16 = port_str
                    .parse()
                    .map_err(|_| format!("invalid proxy target port: {}", port_str))?;
                if port == 0 {
                    return Err("proxy target port must be 1-65535".to_string());
                }
                (host, Some(port))
            }
            None => (rest, None),
        };

        if host.is_empty() {
            return Err(format!("proxy target {} has no host", s));
        }
        if host.contains(char::is_whitespace) {
            return Err(format!("proxy target {} has an invalid host", s));
        }

        Ok(TargetUrl {
            raw: s.to_string(),
            scheme,
            host: host.to_string(),
            port,
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Default backend origin on the compose network.
    pub(crate) fn default_backend() -> Self {
        TargetUrl {
            raw: "http://backend:8000".to_string(),
            scheme: Scheme::Http,
            host: "backend".to_string(),
            port: Some(8000),
        }
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for TargetUrl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetUrl::parse(s)
    }
}

impl<'de> Deserialize<'de> for TargetUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TargetUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TargetUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}
