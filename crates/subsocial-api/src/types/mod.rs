//! Subsocial data types
//!
//! On-chain structs, their off-chain content documents, and the merged
//! entities returned by the API.

mod content;
mod entity;
mod query;
mod structs;

pub use content::{PostContent, ProfileContent, SpaceContent};
pub use entity::{EntityData, PostData, PostWithAllDetails, PostWithSomeDetails, ProfileData, SpaceData};
pub use query::{FindPostWithDetails, FindPostsWithDetails, FindStruct, FindStructs, PostDetailsOpts};
pub use structs::{PostExtension, PostStruct, ProfileStruct, SpaceStruct, WhoAndWhen};

use serde::{Deserialize, Serialize};

pub type SpaceId = u64;
pub type PostId = u64;

/// Account address (SS58). Profiles are keyed by the account that owns them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content address (IPFS CID) of an off-chain document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
