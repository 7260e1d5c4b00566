//! Finder functions used by the post details loader

use crate::error::Result;
use crate::types::{AccountId, PostData, PostId, ProfileData, SpaceData, SpaceId};
use crate::visibility::Filters;
use async_trait::async_trait;

/// The three lookups the details loader needs for related entities.
///
/// Each call receives every id of one relation kind at once and must answer
/// with a single batch. Results may be partial and in any order.
#[async_trait]
pub trait StructFinders: Send + Sync {
    /// Spaces that own the posts
    async fn find_spaces(&self, ids: Vec<SpaceId>) -> Result<Vec<SpaceData>>;

    /// Posts shared by the posts, filtered like the posts themselves
    async fn find_posts(&self, ids: Vec<PostId>, filters: Filters) -> Result<Vec<PostData>>;

    /// Profiles of the post owners
    async fn find_profiles(&self, ids: Vec<AccountId>) -> Result<Vec<ProfileData>>;
}
