//! Chain struct source and per-kind binding

use crate::error::Result;
use crate::types::{AccountId, ContentId, PostId, PostStruct, PostContent, ProfileContent, ProfileStruct, SpaceContent, SpaceId, SpaceStruct};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Source of on-chain structs.
///
/// Each call is one batch. Ids without a struct are simply left out of the
/// returned map.
#[async_trait]
pub trait StructSource: Send + Sync {
    async fn get_spaces(&self, ids: &[SpaceId]) -> Result<HashMap<SpaceId, SpaceStruct>>;

    async fn get_posts(&self, ids: &[PostId]) -> Result<HashMap<PostId, PostStruct>>;

    async fn get_profiles(&self, ids: &[AccountId]) -> Result<HashMap<AccountId, ProfileStruct>>;
}

/// Binds a struct type to its id, its content document and the
/// [`StructSource`] call that loads it.
#[async_trait]
pub trait ChainStruct: Debug + Clone + PartialEq + Serialize + Send + Sync + 'static {
    type Id: Debug + Clone + Eq + Hash + Serialize + Send + Sync + 'static;
    type Content: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Kind name used in logs (e.g., "space", "post")
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    fn hidden(&self) -> bool;

    fn content_id(&self) -> Option<&ContentId>;

    async fn load(source: &dyn StructSource, ids: &[Self::Id]) -> Result<HashMap<Self::Id, Self>>;
}

#[async_trait]
impl ChainStruct for SpaceStruct {
    type Id = SpaceId;
    type Content = SpaceContent;

    const KIND: &'static str = "space";

    fn id(&self) -> &SpaceId {
        &self.id
    }

    fn hidden(&self) -> bool {
        self.hidden
    }

    fn content_id(&self) -> Option<&ContentId> {
        self.content.as_ref()
    }

    async fn load(source: &dyn StructSource, ids: &[SpaceId]) -> Result<HashMap<SpaceId, Self>> {
        source.get_spaces(ids).await
    }
}

#[async_trait]
impl ChainStruct for PostStruct {
    type Id = PostId;
    type Content = PostContent;

    const KIND: &'static str = "post";

    fn id(&self) -> &PostId {
        &self.id
    }

    fn hidden(&self) -> bool {
        self.hidden
    }

    fn content_id(&self) -> Option<&ContentId> {
        self.content.as_ref()
    }

    async fn load(source: &dyn StructSource, ids: &[PostId]) -> Result<HashMap<PostId, Self>> {
        source.get_posts(ids).await
    }
}

#[async_trait]
impl ChainStruct for ProfileStruct {
    type Id = AccountId;
    type Content = ProfileContent;

    const KIND: &'static str = "profile";

    fn id(&self) -> &AccountId {
        &self.account
    }

    /// Profiles cannot be hidden on chain
    fn hidden(&self) -> bool {
        false
    }

    fn content_id(&self) -> Option<&ContentId> {
        self.content.as_ref()
    }

    async fn load(source: &dyn StructSource, ids: &[AccountId]) -> Result<HashMap<AccountId, Self>> {
        source.get_profiles(ids).await
    }
}
