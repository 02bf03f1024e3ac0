//! Deterministic SHA-256 content fingerprints
//!
//! This crate turns an arbitrary block of text or bytes into a fixed
//! 64-character lowercase hexadecimal fingerprint computed with SHA-256.
//! Fingerprints are meant for content identification and integrity
//! checks. No key, salt or HMAC construction is involved.
//!
//! # Module overview
//!
//! - `hash`
//!   A from-scratch SHA-256: message padding, the compression function
//!   and one-shot / incremental hashers.
//!
//! - `digest`
//!   The 32-byte [`Digest`] produced by the hash, and its hex form.
//!
//! - `hex`
//!   Lowercase hex encoding and the matching decoder.
//!
//! - `fingerprint`
//!   The entry points: [`digest_hex`] for text, [`digest_bytes`] for raw
//!   content.
//!
//! - `group`
//!   Grouping entries with identical content and building manifests of
//!   shortened fingerprints.
//!
//! # Notes
//!
//! Every call owns its own hash state, so fingerprints can be computed
//! from any number of threads without synchronization. The implementation
//! makes no attempt at constant-time execution.

mod error;

pub mod digest;
pub mod fingerprint;
pub mod group;
pub mod hash;
pub mod hex;

pub use digest::Digest;
pub use error::{Error, Result};
pub use fingerprint::{digest_bytes, digest_hex, digest_str};
pub use group::{Manifest, ManifestConfig, ManifestEntry, duplicates, group_by_digest};
