//! Types for the content client API

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where content documents are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMode {
    /// Plain IPFS HTTP gateway, one request per CID
    /// (`GET {url}/ipfs/{cid}`)
    Gateway {
        /// Gateway URL (e.g., "https://ipfs.subsocial.network")
        url: String,
    },

    /// Subsocial offchain service, one request per batch
    /// (`POST {url}/v1/ipfs/get`)
    Offchain {
        /// Offchain service URL
        url: String,
    },
}

impl ContentMode {
    /// Base URL of the selected backend
    pub fn base_url(&self) -> &str {
        match self {
            ContentMode::Gateway { url } | ContentMode::Offchain { url } => url.trim_end_matches('/'),
        }
    }

    /// Whether a batch is fetched with a single request
    pub fn is_batched(&self) -> bool {
        matches!(self, ContentMode::Offchain { .. })
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ContentClientConfig {
    /// Backend to read documents from
    pub mode: ContentMode,
    /// Optional API key for authentication
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Parallel gateway requests per batch (default: 8)
    pub max_concurrent_requests: usize,
}

impl Default for ContentClientConfig {
    fn default() -> Self {
        Self {
            mode: ContentMode::Gateway {
                url: "http://localhost:8080".to_string(),
            },
            api_key: None,
            timeout_secs: 30,
            max_concurrent_requests: 8,
        }
    }
}

impl ContentClientConfig {
    /// Configuration for a public IPFS gateway
    pub fn gateway(url: impl Into<String>) -> Self {
        Self {
            mode: ContentMode::Gateway { url: url.into() },
            ..Default::default()
        }
    }

    /// Configuration for the offchain batch endpoint
    pub fn offchain(url: impl Into<String>) -> Self {
        Self {
            mode: ContentMode::Offchain { url: url.into() },
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = max;
        self
    }
}

/// Request body for the offchain batch endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetContentsRequest {
    /// CIDs to resolve
    pub cids: Vec<String>,
}

/// Documents keyed by CID string. CIDs the store could not resolve are absent.
pub type ContentResult = HashMap<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let mode = ContentMode::Gateway {
            url: "https://ipfs.example.com/".into(),
        };
        assert_eq!(mode.base_url(), "https://ipfs.example.com");
        assert!(!mode.is_batched());
    }

    #[test]
    fn test_offchain_preset() {
        let config = ContentClientConfig::offchain("http://localhost:3001")
            .with_api_key("secret")
            .with_timeout(5);

        assert!(config.mode.is_batched());
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_concurrent_requests, 8);
    }

    #[test]
    fn test_request_serialization() {
        let request = GetContentsRequest {
            cids: vec!["bafy1".to_string(), "bafy2".to_string()],
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"cids":["bafy1","bafy2"]}"#);
    }
}
