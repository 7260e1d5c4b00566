//! Struct fetcher
//!
//! Loads structs of one kind, loads the content documents of the ones that
//! can still pass the filter, and returns the merged survivors.

use crate::error::Result;
use crate::traits::{ChainStruct, ContentStore, StructSource};
use crate::types::{ContentId, EntityData};
use crate::visibility::Filters;
use std::collections::{HashMap, HashSet};

/// Merges structs from a [`StructSource`] with documents from a
/// [`ContentStore`].
///
/// Two collaborator calls at most per fetch: one for structs, one for
/// content. Neither is made when there is nothing to ask for.
#[derive(Clone, Copy)]
pub struct StructFetcher<'a> {
    structs: &'a dyn StructSource,
    contents: &'a dyn ContentStore,
}

impl<'a> StructFetcher<'a> {
    pub fn new(structs: &'a dyn StructSource, contents: &'a dyn ContentStore) -> Self {
        Self { structs, contents }
    }

    /// Fetch and classify the entities for `ids`.
    ///
    /// Results follow the order of `ids`. Ids without a struct, and entities
    /// the filters reject, are left out. Duplicate ids are not collapsed.
    pub async fn fetch<S: ChainStruct>(&self, ids: &[S::Id], filters: Filters) -> Result<Vec<EntityData<S>>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = S::load(self.structs, ids).await?;

        let candidates: Vec<&S> = ids
            .iter()
            .filter_map(|id| found.get(id))
            .filter(|s| !filters.rejects_by_flag(s.hidden()))
            .collect();

        let docs = self.load_contents(&candidates).await?;

        let mut entities = Vec::with_capacity(candidates.len());
        for s in candidates {
            let content = s
                .content_id()
                .and_then(|cid| docs.get(cid).and_then(|raw| parse_content::<S>(cid, raw)));

            if filters.accepts(s.hidden(), content.is_some()) {
                entities.push(EntityData::new(s.clone(), content));
            }
        }

        tracing::debug!(
            "Fetched {} of {} requested {}s ({} on chain) with {:?}",
            entities.len(),
            ids.len(),
            S::KIND,
            found.len(),
            filters
        );

        Ok(entities)
    }

    async fn load_contents<S: ChainStruct>(
        &self,
        candidates: &[&S],
    ) -> Result<HashMap<ContentId, serde_json::Value>> {
        let mut seen = HashSet::new();
        let cids: Vec<ContentId> = candidates
            .iter()
            .filter_map(|s| s.content_id())
            .filter(|cid| seen.insert(*cid))
            .cloned()
            .collect();

        if cids.is_empty() {
            return Ok(HashMap::new());
        }

        self.contents.get_contents(&cids).await
    }
}

/// Documents that do not fit the expected shape count as missing
fn parse_content<S: ChainStruct>(cid: &ContentId, raw: &serde_json::Value) -> Option<S::Content> {
    // serde fills structs from arrays by position, so only objects qualify
    if !raw.is_object() {
        tracing::warn!("Ignoring non-object {} content {}", S::KIND, cid);
        return None;
    }

    match serde_json::from_value(raw.clone()) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!("Ignoring malformed {} content {}: {}", S::KIND, cid, e);
            None
        }
    }
}
