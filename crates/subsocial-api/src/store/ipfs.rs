//! IPFS-backed content store

use crate::error::Result;
use crate::traits::ContentStore;
use crate::types::ContentId;
use async_trait::async_trait;
use std::collections::HashMap;
use subsocial_content_client::ContentClient;

#[async_trait]
impl ContentStore for ContentClient {
    async fn get_contents(&self, cids: &[ContentId]) -> Result<HashMap<ContentId, serde_json::Value>> {
        let raw: Vec<String> = cids.iter().map(|cid| cid.as_str().to_string()).collect();
        let docs = ContentClient::get_contents(self, &raw).await?;

        Ok(docs.into_iter().map(|(cid, doc)| (ContentId(cid), doc)).collect())
    }
}
