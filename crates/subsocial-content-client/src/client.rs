//! HTTP client for Subsocial content documents

use crate::error::{ContentError, Result};
use crate::types::*;
use cid::Cid;
use futures::stream::{self, StreamExt};
use reqwest::{header, Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;

/// HTTP client for content documents addressed by CID
///
/// # Example
///
/// ```rust,no_run
/// use subsocial_content_client::{ContentClient, ContentClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ContentClient::new(ContentClientConfig::gateway("https://ipfs.subsocial.network"))?;
///
/// // Single document, `None` when the gateway does not have it
/// let doc = client.get_content("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG").await?;
/// # Ok(())
/// # }
/// ```
pub struct ContentClient {
    config: ContentClientConfig,
    client: Client,
}

impl ContentClient {
    /// Create a new content client
    pub fn new(config: ContentClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref api_key) = config.api_key {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| ContentError::Config(format!("Invalid API key: {}", e)))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ContentClientConfig {
        &self.config
    }

    /// Get a single document by CID
    pub async fn get_content(&self, cid: &str) -> Result<Option<serde_json::Value>> {
        let cid = parse_cid(cid)?;

        match &self.config.mode {
            ContentMode::Gateway { .. } => self.fetch_from_gateway(&cid).await,
            ContentMode::Offchain { .. } => {
                let mut docs = self.fetch_from_offchain(&[cid.clone()]).await?;
                Ok(docs.remove(&cid))
            }
        }
    }

    /// Get a batch of documents by CID
    ///
    /// Invalid CIDs are skipped, duplicates are requested once. The returned
    /// map is keyed by the CIDs exactly as passed in, surrounding whitespace
    /// included. CIDs the backend cannot resolve are absent from it; only a
    /// failure of the batch request itself is returned as an error.
    pub async fn get_contents(&self, cids: &[String]) -> Result<ContentResult> {
        let valid = valid_cids(cids);
        if valid.is_empty() {
            return Ok(HashMap::new());
        }

        let requested: Vec<String> = valid.iter().map(|(cid, _)| cid.clone()).collect();
        let docs = if self.config.mode.is_batched() {
            self.fetch_from_offchain(&requested).await?
        } else {
            self.fetch_batch_from_gateway(&requested).await
        };

        Ok(rekey(docs, valid))
    }

    // ==================== Gateway ====================

    async fn fetch_from_gateway(&self, cid: &str) -> Result<Option<serde_json::Value>> {
        let url = gateway_url(self.config.mode.base_url(), cid);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Server {
                status,
                message: body,
            });
        }

        Ok(Some(response.json().await?))
    }

    async fn fetch_batch_from_gateway(&self, cids: &[String]) -> ContentResult {
        let this = self;
        let fetched: Vec<(String, Result<Option<serde_json::Value>>)> = stream::iter(cids.iter().cloned())
            .map(move |cid| async move {
                let result = this.fetch_from_gateway(&cid).await;
                (cid, result)
            })
            .buffer_unordered(self.config.max_concurrent_requests.max(1))
            .collect()
            .await;

        let mut docs = HashMap::with_capacity(fetched.len());
        for (cid, result) in fetched {
            match result {
                Ok(Some(doc)) => {
                    docs.insert(cid, doc);
                }
                Ok(None) => {
                    tracing::debug!("Content {} not found on gateway", cid);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch content {}: {}", cid, e);
                }
            }
        }

        tracing::debug!("Fetched {} of {} documents from gateway", docs.len(), cids.len());
        docs
    }

    // ==================== Offchain ====================

    async fn fetch_from_offchain(&self, cids: &[String]) -> Result<ContentResult> {
        let url = offchain_url(self.config.mode.base_url());
        let body = GetContentsRequest {
            cids: cids.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let docs: ContentResult = self.handle_response(response).await?;
        tracing::debug!("Fetched {} of {} documents from offchain", docs.len(), cids.len());
        Ok(docs)
    }

    // ==================== Helper Methods ====================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Server {
                status,
                message: body,
            });
        }

        let body = response.json().await?;
        Ok(body)
    }
}

/// Validate a CID string, returning it trimmed but otherwise unchanged
pub fn parse_cid(cid: &str) -> Result<String> {
    let trimmed = cid.trim();
    Cid::try_from(trimmed).map_err(|e| ContentError::InvalidCid(format!("{}: {}", trimmed, e)))?;
    Ok(trimmed.to_string())
}

/// Distinct valid CIDs in first-seen order, each with the spellings the
/// caller used for it
fn valid_cids(cids: &[String]) -> Vec<(String, Vec<String>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut valid: Vec<(String, Vec<String>)> = Vec::with_capacity(cids.len());

    for original in cids {
        match parse_cid(original) {
            Ok(cid) => match index.get(&cid) {
                Some(&i) => {
                    if !valid[i].1.contains(original) {
                        valid[i].1.push(original.clone());
                    }
                }
                None => {
                    index.insert(cid.clone(), valid.len());
                    valid.push((cid, vec![original.clone()]));
                }
            },
            Err(e) => tracing::warn!("Skipping content id: {}", e),
        }
    }

    valid
}

/// Key fetched documents by the caller's CIDs. Anything the backend sent
/// that was not asked for is dropped.
fn rekey(mut docs: ContentResult, valid: Vec<(String, Vec<String>)>) -> ContentResult {
    let mut keyed = HashMap::with_capacity(docs.len());
    for (cid, originals) in valid {
        if let Some(doc) = docs.remove(&cid) {
            for original in originals {
                keyed.insert(original, doc.clone());
            }
        }
    }
    keyed
}

fn gateway_url(base_url: &str, cid: &str) -> String {
    format!("{}/ipfs/{}", base_url, urlencoding::encode(cid))
}

fn offchain_url(base_url: &str) -> String {
    format!("{}/v1/ipfs/get", base_url)
}
