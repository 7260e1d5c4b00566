//! Subsocial API - read side
//!
//! Spaces, posts and profiles live in two places: an immutable struct on
//! chain (ids, owner, `hidden` flag, content CID) and a JSON document on
//! IPFS (title, body, avatar, ...). This crate fetches both, merges them and
//! decides what a caller gets to see.
//!
//! # Visibility
//!
//! - **visible / hidden**: the on-chain `hidden` flag alone.
//! - **public**: not hidden *and* the document was found.
//! - **unlisted**: hidden *or* the document is missing.
//!
//! # Architecture
//!
//! ```text
//! SubsocialApi ──▶ StructFetcher ──▶ StructSource  (chain)
//!      │                        └──▶ ContentStore  (IPFS)
//!      └──▶ load_post_details ──▶ StructFinders (shared posts, spaces, owners)
//! ```
//!
//! The chain side is reached through [`StructSource`]; bring your own RPC or
//! indexer client. The IPFS side has an HTTP implementation behind the
//! `client` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use subsocial_api::{SubsocialApi, ContentClientConfig, FindPostsWithDetails};
//!
//! let api = SubsocialApi::with_content_client(
//!     Arc::new(chain),
//!     ContentClientConfig::offchain("https://app.subsocial.network/offchain"),
//! )?;
//!
//! let posts = api.find_public_posts(&[1, 2, 3]).await?;
//!
//! let feed = api
//!     .find_public_posts_with_some_details(FindPostsWithDetails::new(ids).with_space())
//!     .await?;
//! ```

// Public find operations
pub mod api;

// Post details loader
pub mod details;

// Struct + content fetcher
pub mod finder;

// In-memory collaborators
pub mod memory;

// Content store backends
mod store;

// Collaborator traits
pub mod traits;

// Data types
pub mod types;

// Helpers
pub mod utils;

// Visibility filters
pub mod visibility;

// Error types
pub mod error;

// Re-export API
pub use api::SubsocialApi;
pub use details::load_post_details;
pub use finder::StructFetcher;
pub use memory::{MemoryContentStore, MemoryStructSource};

// Re-export core traits
pub use traits::{ChainStruct, ContentStore, StructFinders, StructSource};

// Re-export data types
pub use types::*;

// Re-export visibility types
pub use visibility::{classify, Filters, Visibility};

pub use utils::first_or_none;

// Re-export error types
pub use error::{ApiError, Result};

#[cfg(feature = "client")]
pub use subsocial_content_client::{ContentClient, ContentClientConfig, ContentMode};
