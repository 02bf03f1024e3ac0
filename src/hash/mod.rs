//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation.

pub mod sha256;

/// Re-export of the SHA-256 convenience function and incremental hasher.
pub use sha256::{Sha256, sha256};
