//! Collaborator traits
//!
//! The API never talks to a chain node or IPFS directly. It reads through
//! these traits, so any transport (RPC, indexer, HTTP gateway, in-memory)
//! can back it.

mod content;
mod finders;
mod structs;

pub use content::ContentStore;
pub use finders::StructFinders;
pub use structs::{ChainStruct, StructSource};
