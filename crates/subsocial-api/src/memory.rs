//! In-memory collaborators
//!
//! Fixed struct and content maps with call counters. Handy for tests and
//! for serving a snapshot without a node.

use crate::error::{ApiError, Result};
use crate::traits::{ContentStore, StructSource};
use crate::types::{AccountId, ContentId, PostId, PostStruct, ProfileStruct, SpaceId, SpaceStruct};
use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Struct source backed by hash maps
#[derive(Debug, Default)]
pub struct MemoryStructSource {
    spaces: HashMap<SpaceId, SpaceStruct>,
    posts: HashMap<PostId, PostStruct>,
    profiles: HashMap<AccountId, ProfileStruct>,
    /// When set, every call fails with this message
    failure: Option<String>,
    space_calls: AtomicUsize,
    post_calls: AtomicUsize,
    profile_calls: AtomicUsize,
}

impl MemoryStructSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_space(mut self, space: SpaceStruct) -> Self {
        self.spaces.insert(space.id, space);
        self
    }

    pub fn with_post(mut self, post: PostStruct) -> Self {
        self.posts.insert(post.id, post);
        self
    }

    pub fn with_profile(mut self, profile: ProfileStruct) -> Self {
        self.profiles.insert(profile.account.clone(), profile);
        self
    }

    /// Make every call fail, as a broken node connection would
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn space_calls(&self) -> usize {
        self.space_calls.load(Ordering::SeqCst)
    }

    pub fn post_calls(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.space_calls() + self.post_calls() + self.profile_calls()
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(ApiError::StructSource(message.clone())),
            None => Ok(()),
        }
    }
}

fn pick<K: Eq + Hash + Clone, V: Clone>(map: &HashMap<K, V>, ids: &[K]) -> HashMap<K, V> {
    ids.iter()
        .filter_map(|id| map.get(id).map(|v| (id.clone(), v.clone())))
        .collect()
}

#[async_trait]
impl StructSource for MemoryStructSource {
    async fn get_spaces(&self, ids: &[SpaceId]) -> Result<HashMap<SpaceId, SpaceStruct>> {
        self.space_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(pick(&self.spaces, ids))
    }

    async fn get_posts(&self, ids: &[PostId]) -> Result<HashMap<PostId, PostStruct>> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(pick(&self.posts, ids))
    }

    async fn get_profiles(&self, ids: &[AccountId]) -> Result<HashMap<AccountId, ProfileStruct>> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(pick(&self.profiles, ids))
    }
}

/// Content store backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    docs: HashMap<ContentId, serde_json::Value>,
    failure: Option<String>,
    calls: AtomicUsize,
    requested: AtomicUsize,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, cid: impl Into<ContentId>, doc: serde_json::Value) -> Self {
        self.docs.insert(cid.into(), doc);
        self
    }

    /// Make every call fail, as an unreachable gateway would
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of batch calls made
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of CIDs asked for across all calls
    pub fn requested(&self) -> usize {
        self.requested.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn get_contents(&self, cids: &[ContentId]) -> Result<HashMap<ContentId, serde_json::Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.fetch_add(cids.len(), Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(ApiError::ContentStore(message.clone()));
        }
        Ok(pick(&self.docs, cids))
    }
}
