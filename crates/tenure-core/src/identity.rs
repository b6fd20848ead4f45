// Rust guideline compliant 2026-10-12

//! Hash-based record identifiers.
//!
//! IDs have the form `<prefix>-<8 hex digits>`, where the prefix names the
//! table (`ctr`, `min`, `amd`, `aud`).

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Number of hex digits in the hash part of an ID.
pub const HASH_LEN: usize = 8;

/// Generates a record ID.
///
/// # Arguments
///
/// * `prefix` - Table prefix
/// * `seed` - Content the ID is derived from
/// * `timestamp` - Creation timestamp
/// * `nonce` - Collision counter
///
/// # Returns
///
/// The new ID.
pub fn generate_id(prefix: &str, seed: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(seed.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}-{}", prefix, &hex[..HASH_LEN])
}

/// Generates an ID not present in `existing`.
pub fn generate_unique_id<'a, I>(prefix: &str, seed: &str, timestamp: i64, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    let mut nonce = 0u32;
    loop {
        let id = generate_id(prefix, seed, timestamp, nonce);
        if !taken.contains(&id.as_str()) {
            return id;
        }
        nonce = nonce.saturating_add(1);
    }
}

/// Resolves a full or partial ID against the known IDs.
///
/// An exact match wins; otherwise the input must be a prefix of exactly one
/// ID.
///
/// # Errors
///
/// Returns `NotFound` when nothing matches and `AmbiguousId` when several do.
pub fn resolve_partial<'a, I>(partial: &str, ids: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let partial = partial.trim();
    let mut matches = Vec::new();

    for id in ids {
        if id == partial {
            return Ok(id.to_string());
        }
        if !partial.is_empty() && id.starts_with(partial) {
            matches.push(id.to_string());
        }
    }

    match matches.len() {
        0 => Err(Error::NotFound(partial.to_string())),
        1 => Ok(matches.remove(0)),
        _ => Err(Error::AmbiguousId(partial.to_string(), matches)),
    }
}
