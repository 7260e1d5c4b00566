//! Query options for the find operations

use super::PostId;
use crate::visibility::{Filters, Visibility};

/// Find several structs by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindStructs<Id> {
    pub ids: Vec<Id>,
    pub visibility: Option<Visibility>,
    pub with_content_only: bool,
}

impl<Id> FindStructs<Id> {
    pub fn new(ids: Vec<Id>) -> Self {
        Self {
            ids,
            visibility: None,
            with_content_only: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_content_only(mut self) -> Self {
        self.with_content_only = true;
        self
    }

    pub fn filters(&self) -> Filters {
        Filters {
            visibility: self.visibility,
            with_content_only: self.with_content_only,
        }
    }
}

/// Find one struct by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindStruct<Id> {
    pub id: Id,
    pub visibility: Option<Visibility>,
    pub with_content_only: bool,
}

impl<Id> FindStruct<Id> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            visibility: None,
            with_content_only: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_content_only(mut self) -> Self {
        self.with_content_only = true;
        self
    }
}

impl<Id> From<FindStruct<Id>> for FindStructs<Id> {
    fn from(query: FindStruct<Id>) -> Self {
        Self {
            ids: vec![query.id],
            visibility: query.visibility,
            with_content_only: query.with_content_only,
        }
    }
}

/// Which related entities to load for each post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostDetailsOpts {
    /// Applied to the shared (extension) posts
    pub visibility: Option<Visibility>,
    /// Shared posts without content are dropped
    pub with_content_only: bool,
    pub with_space: bool,
    pub with_owner: bool,
}

impl PostDetailsOpts {
    /// Both space and owner
    pub fn all(visibility: Option<Visibility>) -> Self {
        Self {
            visibility,
            with_content_only: false,
            with_space: true,
            with_owner: true,
        }
    }

    /// Filters for the shared post lookup
    pub fn filters(&self) -> Filters {
        Filters {
            visibility: self.visibility,
            with_content_only: self.with_content_only,
        }
    }
}

/// Find several posts together with their related entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPostsWithDetails {
    pub ids: Vec<PostId>,
    pub visibility: Option<Visibility>,
    pub with_content_only: bool,
    pub with_space: bool,
    pub with_owner: bool,
}

impl FindPostsWithDetails {
    pub fn new(ids: Vec<PostId>) -> Self {
        Self {
            ids,
            visibility: None,
            with_content_only: false,
            with_space: false,
            with_owner: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_content_only(mut self) -> Self {
        self.with_content_only = true;
        self
    }

    pub fn with_space(mut self) -> Self {
        self.with_space = true;
        self
    }

    pub fn with_owner(mut self) -> Self {
        self.with_owner = true;
        self
    }

    pub fn details_opts(&self) -> PostDetailsOpts {
        PostDetailsOpts {
            visibility: self.visibility,
            with_content_only: self.with_content_only,
            with_space: self.with_space,
            with_owner: self.with_owner,
        }
    }

    /// Split into the post lookup and the details options
    pub fn into_parts(self) -> (FindStructs<PostId>, PostDetailsOpts) {
        let opts = self.details_opts();
        let query = FindStructs {
            ids: self.ids,
            visibility: self.visibility,
            with_content_only: self.with_content_only,
        };
        (query, opts)
    }
}

/// Find one post together with its related entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPostWithDetails {
    pub id: PostId,
    pub visibility: Option<Visibility>,
    pub with_content_only: bool,
    pub with_space: bool,
    pub with_owner: bool,
}

impl FindPostWithDetails {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            visibility: None,
            with_content_only: false,
            with_space: false,
            with_owner: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_space(mut self) -> Self {
        self.with_space = true;
        self
    }

    pub fn with_owner(mut self) -> Self {
        self.with_owner = true;
        self
    }
}

impl From<FindPostWithDetails> for FindPostsWithDetails {
    fn from(query: FindPostWithDetails) -> Self {
        Self {
            ids: vec![query.id],
            visibility: query.visibility,
            with_content_only: query.with_content_only,
            with_space: query.with_space,
            with_owner: query.with_owner,
        }
    }
}
