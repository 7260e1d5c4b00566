//! Content store trait

use crate::error::Result;
use crate::types::ContentId;
use async_trait::async_trait;
use std::collections::HashMap;

/// Source of off-chain JSON documents keyed by content address.
///
/// Partial results are expected: a CID missing from the returned map means
/// the document is treated as absent. An `Err` means the call as a whole
/// failed and is passed to the caller unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use subsocial_api::{ContentStore, ContentId, Result};
///
/// struct Pinned(HashMap<ContentId, serde_json::Value>);
///
/// #[async_trait]
/// impl ContentStore for Pinned {
///     async fn get_contents(&self, cids: &[ContentId]) -> Result<HashMap<ContentId, serde_json::Value>> {
///         Ok(cids.iter().filter_map(|c| self.0.get(c).map(|v| (c.clone(), v.clone()))).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch every document that can be found, in one batch
    async fn get_contents(&self, cids: &[ContentId]) -> Result<HashMap<ContentId, serde_json::Value>>;
}
