//! Content store backends

#[cfg(feature = "client")]
mod ipfs;
