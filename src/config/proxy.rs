//! Reverse-proxy rule configuration.

use serde::{Deserialize, Serialize};

use super::url::TargetUrl;

/// Forwarding rule for requests whose path matches the rule's prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    /// Backend origin to forward matching requests to.
    pub target: TargetUrl,
    /// Rewrite the Host header to the target's origin.
    #[serde(default)]
    pub change_origin: bool,
}

impl ProxyRule {
    /// Built-in rule forwarding `/api` to the backend container.
    pub(crate) fn default_api() -> Self {
        ProxyRule {
            target: TargetUrl::default_backend(),
            change_origin: true,
        }
    }
}
