//! Entry key hashing

use xxhash_rust::xxh64::xxh64;

use crate::types::HashKind;

/// Compute the hash stored for an entry key.
///
/// Keys are case-insensitive: the xxHash64 is taken over the lowercased key and truncated to the
/// bits available in `kind`.
pub fn compute_hash(name: &str, kind: HashKind) -> u64 {
    xxh64(name.to_lowercase().as_bytes(), 0) & kind.mask()
}
