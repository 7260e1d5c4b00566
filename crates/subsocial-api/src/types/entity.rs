//! Merged struct + content entities

use crate::traits::ChainStruct;
use crate::types::{PostStruct, ProfileStruct, SpaceStruct};
use crate::visibility::Visibility;
use serde::Serialize;
use std::ops::Deref;

/// An on-chain struct merged with its content document, if one was found.
///
/// Visibility is derived from `struct_data` and `content`, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityData<S: ChainStruct> {
    pub id: S::Id,
    #[serde(rename = "struct")]
    pub struct_data: S,
    pub content: Option<S::Content>,
}

pub type SpaceData = EntityData<SpaceStruct>;
pub type PostData = EntityData<PostStruct>;
pub type ProfileData = EntityData<ProfileStruct>;

impl<S: ChainStruct> EntityData<S> {
    pub fn new(struct_data: S, content: Option<S::Content>) -> Self {
        Self {
            id: struct_data.id().clone(),
            struct_data,
            content,
        }
    }

    pub fn hidden(&self) -> bool {
        self.struct_data.hidden()
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    pub fn matches(&self, visibility: Visibility) -> bool {
        visibility.matches(self.hidden(), self.has_content())
    }

    pub fn is_public(&self) -> bool {
        self.matches(Visibility::OnlyPublic)
    }

    pub fn is_unlisted(&self) -> bool {
        self.matches(Visibility::OnlyUnlisted)
    }

    /// The two categories this entity belongs to: visible or hidden, and
    /// public or unlisted.
    pub fn categories(&self) -> (Visibility, Visibility) {
        let flag = if self.hidden() {
            Visibility::OnlyHidden
        } else {
            Visibility::OnlyVisible
        };
        let reach = if self.is_public() {
            Visibility::OnlyPublic
        } else {
            Visibility::OnlyUnlisted
        };
        (flag, reach)
    }
}

/// A post with whichever related entities could be resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWithSomeDetails {
    pub post: PostData,
    /// The post this one shares
    pub ext: Option<PostData>,
    pub space: Option<SpaceData>,
    pub owner: Option<ProfileData>,
}

impl PostWithSomeDetails {
    pub fn new(post: PostData) -> Self {
        Self {
            post,
            ext: None,
            space: None,
            owner: None,
        }
    }
}

/// A post loaded with both space and owner requested.
///
/// Relations that could not be resolved are still `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PostWithAllDetails(pub PostWithSomeDetails);

impl PostWithAllDetails {
    pub fn into_inner(self) -> PostWithSomeDetails {
        self.0
    }
}

impl Deref for PostWithAllDetails {
    type Target = PostWithSomeDetails;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<PostWithSomeDetails> for PostWithAllDetails {
    fn from(details: PostWithSomeDetails) -> Self {
        Self(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountId, ContentId, PostContent, PostExtension, WhoAndWhen};

    fn post(hidden: bool, content: Option<&str>) -> PostStruct {
        let owner = AccountId::from("owner");
        PostStruct {
            id: 1,
            owner: owner.clone(),
            created: WhoAndWhen {
                account: owner,
                block: 1,
                time: 0,
            },
            updated: None,
            space_id: Some(1),
            extension: PostExtension::RegularPost,
            hidden,
            content: content.map(ContentId::from),
            replies_count: 0,
            shares_count: 0,
            upvotes_count: 0,
            downvotes_count: 0,
        }
    }

    #[test]
    fn test_categories() {
        let public = PostData::new(post(false, Some("bafy")), Some(PostContent::default()));
        assert_eq!(public.categories(), (Visibility::OnlyVisible, Visibility::OnlyPublic));

        // Visible on chain but the document never arrived
        let missing = PostData::new(post(false, Some("bafy")), None);
        assert_eq!(missing.categories(), (Visibility::OnlyVisible, Visibility::OnlyUnlisted));

        let hidden = PostData::new(post(true, Some("bafy")), Some(PostContent::default()));
        assert_eq!(hidden.categories(), (Visibility::OnlyHidden, Visibility::OnlyUnlisted));
        assert!(hidden.is_unlisted());
        assert!(!hidden.is_public());
    }

    #[test]
    fn test_all_details_derefs() {
        let details = PostWithAllDetails::from(PostWithSomeDetails::new(PostData::new(post(false, None), None)));
        assert_eq!(details.post.id, 1);
        assert!(details.space.is_none());
        assert_eq!(details.into_inner().post.id, 1);
    }
}
