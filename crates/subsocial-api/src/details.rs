//! Post details loader
//!
//! Attaches the shared post, the space and the owner's profile to each post
//! of a list. Related ids are collected across the whole list first so that
//! every relation kind costs one lookup, however many posts there are.

use crate::error::Result;
use crate::traits::{ChainStruct, StructFinders};
use crate::types::{AccountId, EntityData, PostData, PostDetailsOpts, PostId, PostWithSomeDetails, ProfileData, SpaceData, SpaceId};
use crate::visibility::Filters;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Load related entities for `posts`.
///
/// The output has one entry per input post, in input order. A relation that
/// was not requested, or could not be resolved, is left as `None`.
///
/// The shared-post, space and owner lookups are independent and run
/// concurrently.
pub async fn load_post_details(
    posts: Vec<PostData>,
    finders: &dyn StructFinders,
    opts: PostDetailsOpts,
) -> Result<Vec<PostWithSomeDetails>> {
    if posts.is_empty() {
        return Ok(Vec::new());
    }

    let ext_ids = distinct(posts.iter().filter_map(|p| p.struct_data.shared_post_id()));

    let space_ids = if opts.with_space {
        distinct(posts.iter().filter_map(|p| p.struct_data.space_id))
    } else {
        Vec::new()
    };

    let owner_ids = if opts.with_owner {
        distinct(posts.iter().map(|p| p.struct_data.owner.clone()))
    } else {
        Vec::new()
    };

    let (exts, spaces, owners) = tokio::try_join!(
        find_ext_posts(finders, ext_ids, opts.filters()),
        find_spaces(finders, space_ids),
        find_owners(finders, owner_ids),
    )?;

    tracing::debug!(
        "Resolved details for {} posts: {} shared posts, {} spaces, {} owners",
        posts.len(),
        exts.len(),
        spaces.len(),
        owners.len()
    );

    let details = posts
        .into_iter()
        .map(|post| {
            let ext = post
                .struct_data
                .shared_post_id()
                .and_then(|id| exts.get(&id).cloned());
            let space = post
                .struct_data
                .space_id
                .and_then(|id| spaces.get(&id).cloned());
            let owner = owners.get(&post.struct_data.owner).cloned();

            PostWithSomeDetails {
                post,
                ext,
                space,
                owner,
            }
        })
        .collect();

    Ok(details)
}

async fn find_ext_posts(
    finders: &dyn StructFinders,
    ids: Vec<PostId>,
    filters: Filters,
) -> Result<HashMap<PostId, PostData>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(by_id(finders.find_posts(ids, filters).await?))
}

async fn find_spaces(finders: &dyn StructFinders, ids: Vec<SpaceId>) -> Result<HashMap<SpaceId, SpaceData>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(by_id(finders.find_spaces(ids).await?))
}

async fn find_owners(finders: &dyn StructFinders, ids: Vec<AccountId>) -> Result<HashMap<AccountId, ProfileData>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(by_id(finders.find_profiles(ids).await?))
}

fn by_id<S: ChainStruct>(entities: Vec<EntityData<S>>) -> HashMap<S::Id, EntityData<S>> {
    let mut map = HashMap::with_capacity(entities.len());
    for entity in entities {
        map.entry(entity.id.clone()).or_insert(entity);
    }
    map
}

/// Unique values in first-seen order
fn distinct<T: Eq + Hash + Clone>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}
