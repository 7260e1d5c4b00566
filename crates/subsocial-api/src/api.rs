//! Subsocial read API
//!
//! Find operations over spaces, posts and profiles. Every operation merges
//! the on-chain struct with its IPFS document and applies a visibility
//! filter; singular variants wrap a one-element lookup.

use crate::details::load_post_details;
use crate::error::Result;
use crate::finder::StructFetcher;
use crate::traits::{ChainStruct, ContentStore, StructFinders, StructSource};
use crate::types::*;
use crate::utils::first_or_none;
use crate::visibility::{Filters, Visibility};
use async_trait::async_trait;
use std::sync::Arc;

/// Read API over a chain struct source and a content store
///
/// # Example
///
/// ```rust,ignore
/// use subsocial_api::{SubsocialApi, ContentClientConfig};
///
/// let api = SubsocialApi::with_content_client(
///     Arc::new(my_chain_source),
///     ContentClientConfig::gateway("https://ipfs.subsocial.network"),
/// )?;
///
/// // Public = not hidden on chain and has a document on IPFS
/// let posts = api.find_public_posts(&[1, 2, 3]).await?;
///
/// // With space and owner profile attached
/// let post = api.find_public_post_with_all_details(1).await?;
/// ```
#[derive(Clone)]
pub struct SubsocialApi {
    structs: Arc<dyn StructSource>,
    contents: Arc<dyn ContentStore>,
}

impl SubsocialApi {
    pub fn new(structs: Arc<dyn StructSource>, contents: Arc<dyn ContentStore>) -> Self {
        Self { structs, contents }
    }

    /// Create an API that reads documents through the HTTP content client
    #[cfg(feature = "client")]
    pub fn with_content_client(
        structs: Arc<dyn StructSource>,
        config: subsocial_content_client::ContentClientConfig,
    ) -> Result<Self> {
        let client = subsocial_content_client::ContentClient::new(config)?;
        Ok(Self::new(structs, Arc::new(client)))
    }

    pub fn struct_source(&self) -> &dyn StructSource {
        self.structs.as_ref()
    }

    pub fn content_store(&self) -> &dyn ContentStore {
        self.contents.as_ref()
    }

    fn fetcher(&self) -> StructFetcher<'_> {
        StructFetcher::new(self.structs.as_ref(), self.contents.as_ref())
    }

    /// Generic lookup for any struct kind
    pub async fn find_structs<S: ChainStruct>(&self, ids: &[S::Id], filters: Filters) -> Result<Vec<EntityData<S>>> {
        self.fetcher().fetch::<S>(ids, filters).await
    }

    // === Spaces ===

    pub async fn find_spaces(&self, query: FindStructs<SpaceId>) -> Result<Vec<SpaceData>> {
        self.find_structs::<SpaceStruct>(&query.ids, query.filters()).await
    }

    pub async fn find_all_spaces(&self, ids: &[SpaceId]) -> Result<Vec<SpaceData>> {
        self.find_structs::<SpaceStruct>(ids, Filters::all()).await
    }

    /// Spaces that are not hidden and have their document on IPFS.
    ///
    /// Returns an empty list when none of `ids` qualifies.
    pub async fn find_public_spaces(&self, ids: &[SpaceId]) -> Result<Vec<SpaceData>> {
        self.find_structs::<SpaceStruct>(ids, Filters::public()).await
    }

    /// Spaces that are hidden or have no document on IPFS.
    ///
    /// Returns an empty list when none of `ids` qualifies.
    pub async fn find_unlisted_spaces(&self, ids: &[SpaceId]) -> Result<Vec<SpaceData>> {
        self.find_structs::<SpaceStruct>(ids, Filters::unlisted()).await
    }

    // === Posts ===

    pub async fn find_posts(&self, query: FindStructs<PostId>) -> Result<Vec<PostData>> {
        self.find_structs::<PostStruct>(&query.ids, query.filters()).await
    }

    pub async fn find_all_posts(&self, ids: &[PostId]) -> Result<Vec<PostData>> {
        self.find_structs::<PostStruct>(ids, Filters::all()).await
    }

    /// Posts that are not hidden and have their document on IPFS.
    ///
    /// Returns an empty list when none of `ids` qualifies.
    pub async fn find_public_posts(&self, ids: &[PostId]) -> Result<Vec<PostData>> {
        self.find_structs::<PostStruct>(ids, Filters::public()).await
    }

    /// Posts that are hidden or have no document on IPFS.
    ///
    /// Returns an empty list when none of `ids` qualifies.
    pub async fn find_unlisted_posts(&self, ids: &[PostId]) -> Result<Vec<PostData>> {
        self.find_structs::<PostStruct>(ids, Filters::unlisted()).await
    }

    // === Profiles ===

    /// Profiles have no hidden flag and are returned with or without content
    pub async fn find_profiles(&self, ids: &[AccountId]) -> Result<Vec<ProfileData>> {
        self.find_structs::<ProfileStruct>(ids, Filters::all()).await
    }

    // === Posts with details ===

    /// Find posts, then attach their shared post and, if asked, space and owner
    pub async fn find_posts_with_some_details(&self, query: FindPostsWithDetails) -> Result<Vec<PostWithSomeDetails>> {
        let (query, opts) = query.into_parts();
        let posts = self.find_posts(query).await?;
        load_post_details(posts, self, opts).await
    }

    pub async fn find_public_posts_with_some_details(
        &self,
        query: FindPostsWithDetails,
    ) -> Result<Vec<PostWithSomeDetails>> {
        self.find_posts_with_some_details(query.with_visibility(Visibility::OnlyPublic))
            .await
    }

    pub async fn find_unlisted_posts_with_some_details(
        &self,
        query: FindPostsWithDetails,
    ) -> Result<Vec<PostWithSomeDetails>> {
        self.find_posts_with_some_details(query.with_visibility(Visibility::OnlyUnlisted))
            .await
    }

    /// Find posts with shared post, space and owner requested
    pub async fn find_posts_with_all_details(&self, query: FindStructs<PostId>) -> Result<Vec<PostWithAllDetails>> {
        let query = FindPostsWithDetails {
            ids: query.ids,
            visibility: query.visibility,
            with_content_only: query.with_content_only,
            with_space: true,
            with_owner: true,
        };

        let details = self.find_posts_with_some_details(query).await?;
        Ok(details.into_iter().map(PostWithAllDetails::from).collect())
    }

    pub async fn find_public_posts_with_all_details(&self, ids: &[PostId]) -> Result<Vec<PostWithAllDetails>> {
        self.find_posts_with_all_details(FindStructs::new(ids.to_vec()).with_visibility(Visibility::OnlyPublic))
            .await
    }

    pub async fn find_unlisted_posts_with_all_details(&self, ids: &[PostId]) -> Result<Vec<PostWithAllDetails>> {
        self.find_posts_with_all_details(FindStructs::new(ids.to_vec()).with_visibility(Visibility::OnlyUnlisted))
            .await
    }

    // === Single element ===

    pub async fn find_space(&self, query: FindStruct<SpaceId>) -> Result<Option<SpaceData>> {
        Ok(first_or_none(self.find_spaces(query.into()).await?))
    }

    /// Public space by id, `None` if it does not exist or is not public
    pub async fn find_public_space(&self, id: SpaceId) -> Result<Option<SpaceData>> {
        Ok(first_or_none(self.find_public_spaces(&[id]).await?))
    }

    /// Unlisted space by id, `None` if it does not exist or is public
    pub async fn find_unlisted_space(&self, id: SpaceId) -> Result<Option<SpaceData>> {
        Ok(first_or_none(self.find_unlisted_spaces(&[id]).await?))
    }

    pub async fn find_post(&self, query: FindStruct<PostId>) -> Result<Option<PostData>> {
        Ok(first_or_none(self.find_posts(query.into()).await?))
    }

    /// Public post by id, `None` if it does not exist or is not public
    pub async fn find_public_post(&self, id: PostId) -> Result<Option<PostData>> {
        Ok(first_or_none(self.find_public_posts(&[id]).await?))
    }

    /// Unlisted post by id, `None` if it does not exist or is public
    pub async fn find_unlisted_post(&self, id: PostId) -> Result<Option<PostData>> {
        Ok(first_or_none(self.find_unlisted_posts(&[id]).await?))
    }

    pub async fn find_profile(&self, id: AccountId) -> Result<Option<ProfileData>> {
        Ok(first_or_none(self.find_profiles(&[id]).await?))
    }

    pub async fn find_post_with_some_details(&self, query: FindPostWithDetails) -> Result<Option<PostWithSomeDetails>> {
        Ok(first_or_none(self.find_posts_with_some_details(query.into()).await?))
    }

    pub async fn find_public_post_with_some_details(
        &self,
        query: FindPostWithDetails,
    ) -> Result<Option<PostWithSomeDetails>> {
        Ok(first_or_none(self.find_public_posts_with_some_details(query.into()).await?))
    }

    pub async fn find_unlisted_post_with_some_details(
        &self,
        query: FindPostWithDetails,
    ) -> Result<Option<PostWithSomeDetails>> {
        Ok(first_or_none(self.find_unlisted_posts_with_some_details(query.into()).await?))
    }

    pub async fn find_post_with_all_details(&self, id: PostId) -> Result<Option<PostWithAllDetails>> {
        Ok(first_or_none(self.find_posts_with_all_details(FindStructs::new(vec![id])).await?))
    }

    pub async fn find_public_post_with_all_details(&self, id: PostId) -> Result<Option<PostWithAllDetails>> {
        Ok(first_or_none(self.find_public_posts_with_all_details(&[id]).await?))
    }

    pub async fn find_unlisted_post_with_all_details(&self, id: PostId) -> Result<Option<PostWithAllDetails>> {
        Ok(first_or_none(self.find_unlisted_posts_with_all_details(&[id]).await?))
    }
}

/// Related entities are looked up as public spaces, shared posts with the
/// caller's filters, and unfiltered profiles.
#[async_trait]
impl StructFinders for SubsocialApi {
    async fn find_spaces(&self, ids: Vec<SpaceId>) -> Result<Vec<SpaceData>> {
        SubsocialApi::find_public_spaces(self, &ids).await
    }

    async fn find_posts(&self, ids: Vec<PostId>, filters: Filters) -> Result<Vec<PostData>> {
        self.find_structs::<PostStruct>(&ids, filters).await
    }

    async fn find_profiles(&self, ids: Vec<AccountId>) -> Result<Vec<ProfileData>> {
        SubsocialApi::find_profiles(self, &ids).await
    }
}
