//! Content hashing for the serialization-based equality comparer.

use blake3::Hasher;
use serde::Serialize;

use crate::error::{Error, Result};

/// Hash any serde-serializable value deterministically via its JSON
/// encoding, truncated to the 64 bits the equality layer works in.
pub fn content_hash64<T: Serialize>(value: &T) -> Result<u64> {
    let bytes = serde_json::to_vec(value).map_err(|e| Error::Hash(e.to_string()))?;

    let mut hasher = Hasher::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();

    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    Ok(u64::from_le_bytes(word))
}
