//! On-chain structs as returned by the chain client

use super::{AccountId, ContentId, PostId, SpaceId};
use serde::{Deserialize, Serialize};

/// Author and block/time of a create or update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAndWhen {
    pub account: AccountId,
    pub block: u64,
    /// Unix millis
    pub time: u64,
}

impl WhoAndWhen {
    pub fn new(account: AccountId) -> Self {
        Self {
            account,
            block: 0,
            time: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceStruct {
    pub id: SpaceId,
    pub owner: AccountId,
    pub created: WhoAndWhen,
    #[serde(default)]
    pub updated: Option<WhoAndWhen>,
    pub hidden: bool,
    #[serde(default)]
    pub content: Option<ContentId>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub posts_count: u32,
    #[serde(default)]
    pub followers_count: u32,
}

impl SpaceStruct {
    /// Visible space without content
    pub fn new(id: SpaceId, owner: impl Into<AccountId>) -> Self {
        let owner = owner.into();
        Self {
            id,
            created: WhoAndWhen::new(owner.clone()),
            owner,
            updated: None,
            hidden: false,
            content: None,
            handle: None,
            posts_count: 0,
            followers_count: 0,
        }
    }

    pub fn with_content(mut self, cid: impl Into<ContentId>) -> Self {
        self.content = Some(cid.into());
        self
    }

    pub fn as_hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// What kind of post this is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostExtension {
    RegularPost,
    Comment {
        parent_id: Option<PostId>,
        root_post_id: PostId,
    },
    /// Share of another post, which is resolved as this post's extension
    SharedPost(PostId),
}

impl Default for PostExtension {
    fn default() -> Self {
        Self::RegularPost
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStruct {
    pub id: PostId,
    pub owner: AccountId,
    pub created: WhoAndWhen,
    #[serde(default)]
    pub updated: Option<WhoAndWhen>,
    /// Comments carry no space of their own
    #[serde(default)]
    pub space_id: Option<SpaceId>,
    #[serde(default)]
    pub extension: PostExtension,
    pub hidden: bool,
    #[serde(default)]
    pub content: Option<ContentId>,
    #[serde(default)]
    pub replies_count: u32,
    #[serde(default)]
    pub shares_count: u32,
    #[serde(default)]
    pub upvotes_count: u32,
    #[serde(default)]
    pub downvotes_count: u32,
}

impl PostStruct {
    /// Visible regular post without space or content
    pub fn new(id: PostId, owner: impl Into<AccountId>) -> Self {
        let owner = owner.into();
        Self {
            id,
            created: WhoAndWhen::new(owner.clone()),
            owner,
            updated: None,
            space_id: None,
            extension: PostExtension::RegularPost,
            hidden: false,
            content: None,
            replies_count: 0,
            shares_count: 0,
            upvotes_count: 0,
            downvotes_count: 0,
        }
    }

    pub fn in_space(mut self, space_id: SpaceId) -> Self {
        self.space_id = Some(space_id);
        self
    }

    pub fn with_content(mut self, cid: impl Into<ContentId>) -> Self {
        self.content = Some(cid.into());
        self
    }

    pub fn as_hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn sharing(mut self, post_id: PostId) -> Self {
        self.extension = PostExtension::SharedPost(post_id);
        self
    }

    /// Id of the post this one wraps, if it is a share
    pub fn shared_post_id(&self) -> Option<PostId> {
        match self.extension {
            PostExtension::SharedPost(id) => Some(id),
            _ => None,
        }
    }
}

/// Profile of a social account. There is no `hidden` flag on profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStruct {
    pub account: AccountId,
    pub created: WhoAndWhen,
    #[serde(default)]
    pub updated: Option<WhoAndWhen>,
    #[serde(default)]
    pub content: Option<ContentId>,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub following_accounts_count: u32,
    #[serde(default)]
    pub following_spaces_count: u32,
    #[serde(default)]
    pub reputation: u32,
}

impl ProfileStruct {
    /// Profile without content
    pub fn new(account: impl Into<AccountId>) -> Self {
        let account = account.into();
        Self {
            created: WhoAndWhen::new(account.clone()),
            account,
            updated: None,
            content: None,
            followers_count: 0,
            following_accounts_count: 0,
            following_spaces_count: 0,
            reputation: 0,
        }
    }

    pub fn with_content(mut self, cid: impl Into<ContentId>) -> Self {
        self.content = Some(cid.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_extension_serialization() {
        let json = serde_json::to_value(PostExtension::SharedPost(7)).unwrap();
        assert_eq!(json, serde_json::json!({"sharedPost": 7}));

        let comment: PostExtension =
            serde_json::from_value(serde_json::json!({"comment": {"parent_id": null, "root_post_id": 3}}))
                .unwrap();
        assert_eq!(
            comment,
            PostExtension::Comment {
                parent_id: None,
                root_post_id: 3
            }
        );
    }

    #[test]
    fn test_post_struct_defaults() {
        let post: PostStruct = serde_json::from_value(serde_json::json!({
            "id": 1,
            "owner": "3osmnRNnrcScHsgkTJH1xyBF5kGjpbWHsGrqM31BDBmAfhnx",
            "created": {"account": "3osmnRNnrcScHsgkTJH1xyBF5kGjpbWHsGrqM31BDBmAfhnx", "block": 10, "time": 1000},
            "hidden": false
        }))
        .unwrap();

        assert_eq!(post.extension, PostExtension::RegularPost);
        assert_eq!(post.space_id, None);
        assert_eq!(post.shared_post_id(), None);
    }
}
