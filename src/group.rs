//! Content grouping by fingerprint
//!
//! Helpers built on top of the digest for two common fingerprinting
//! jobs: spotting entries with identical content, and listing entries
//! next to a shortened fingerprint (as found in backup manifests).
//!
//! Entries are `(name, content)` pairs supplied by the caller. Reading
//! files or other sources is left to the caller.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::fingerprint::digest_bytes;

/// Groups entry names by the digest of their content.
pub fn group_by_digest<K, C, I>(entries: I) -> BTreeMap<Digest, BTreeSet<K>>
where
    K: Ord,
    C: AsRef<[u8]>,
    I: IntoIterator<Item = (K, C)>,
{
    let mut groups: BTreeMap<Digest, BTreeSet<K>> = BTreeMap::new();
    let mut count = 0usize;

    for (name, content) in entries {
        groups
            .entry(digest_bytes(content.as_ref()))
            .or_default()
            .insert(name);
        count += 1;
    }

    debug!(entries = count, groups = groups.len(), "grouped by digest");
    groups
}

/// Returns only the groups holding more than one name.
pub fn duplicates<K, C, I>(entries: I) -> BTreeMap<Digest, BTreeSet<K>>
where
    K: Ord,
    C: AsRef<[u8]>,
    I: IntoIterator<Item = (K, C)>,
{
    let mut groups = group_by_digest(entries);
    groups.retain(|_, names| names.len() > 1);
    groups
}

/// Manifest settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Number of hex characters kept from each fingerprint.
    pub hash_len: usize,
}

impl ManifestConfig {
    pub const DEFAULT_HASH_LEN: usize = 16;

    /// Checks that `hash_len` lies in `1..=64`.
    pub fn validate(&self) -> Result<()> {
        if self.hash_len == 0 || self.hash_len > Digest::HEX_LEN {
            return Err(Error::InvalidConfig {
                reason: format!(
                    "hash_len must be between 1 and {}, got {}",
                    Digest::HEX_LEN,
                    self.hash_len
                ),
            });
        }

        Ok(())
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            hash_len: Self::DEFAULT_HASH_LEN,
        }
    }
}

/// One manifest row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry<K> {
    pub name: K,
    pub hash: String,
}

/// Names paired with their shortened fingerprints, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest<K> {
    entries: Vec<ManifestEntry<K>>,
}

impl<K> Manifest<K> {
    /// Fingerprints every entry with the configured hash length.
    pub fn build<C, I>(entries: I, config: &ManifestConfig) -> Result<Self>
    where
        C: AsRef<[u8]>,
        I: IntoIterator<Item = (K, C)>,
    {
        config.validate()?;

        let entries: Vec<_> = entries
            .into_iter()
            .map(|(name, content)| ManifestEntry {
                name,
                hash: digest_bytes(content.as_ref()).short_hex(config.hash_len),
            })
            .collect();

        debug!(entries = entries.len(), hash_len = config.hash_len, "built manifest");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ManifestEntry<K>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct fingerprints, i.e. the set of content blobs to store.
    pub fn unique_hashes(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.hash.as_str()).collect()
    }
}
