//! Rust client for Subsocial content documents stored on IPFS
//!
//! Spaces, posts and profiles keep their human-authored fields (title, body,
//! avatar, ...) off-chain as JSON documents addressed by CID. This crate
//! fetches those documents, either one by one through an IPFS gateway or in a
//! single request through the offchain batch endpoint.
//!
//! # Example
//!
//! ```rust,no_run
//! use subsocial_content_client::{ContentClient, ContentClientConfig, ContentMode};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ContentClient::new(ContentClientConfig {
//!     mode: ContentMode::Offchain {
//!         url: "https://app.subsocial.network/offchain".into(),
//!     },
//!     ..Default::default()
//! })?;
//!
//! let cids = vec!["bafyreib3mgbou4xln42qqcgj6qlt3cif35x4ribisxgq7unhpun525l54e".to_string()];
//! let docs = client.get_contents(&cids).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types
pub use client::ContentClient;
pub use error::{ContentError, Result};
pub use types::*;
