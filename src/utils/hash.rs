//! Content hashing utilities.
//!
//! Two hashers for two jobs:
//! - `rustc_hash::FxHasher` for fast change detection (config reload gating)
//! - `blake3` for stable fingerprints that leave the process (SVG element
//!   ids, ETags, the settings version)
//!
//! The 32-bit *seed* hash lives in `avatar::hash`; it is a compatibility
//! contract, not a utility.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute a fast 64-bit hash of byte data (process-local use only).
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute a blake3 fingerprint truncated to `len` hex characters.
///
/// Used wherever a short, stable identifier derived from content is needed
/// (SVG def ids, cache validators). `len` must be at most 64.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(data: &T, len: usize) -> String {
    let hash = blake3::hash(data.as_ref());
    hex::encode(hash.as_bytes())[..len].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_deterministic() {
        assert_eq!(compute("same input"), compute("same input"));
        assert_ne!(compute("one"), compute("two"));
    }

    #[test]
    fn test_fingerprint_length_and_charset() {
        let fp = fingerprint("alice|64|gradient|round", 10);
        assert_eq!(fp.len(), 10);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_stable_and_distinct() {
        assert_eq!(fingerprint("payload", 16), fingerprint("payload", 16));
        assert_ne!(fingerprint("payload", 16), fingerprint("payload2", 16));
    }

    #[test]
    fn test_fingerprint_truncation_is_prefix() {
        let long = fingerprint("payload", 32);
        let short = fingerprint("payload", 10);
        assert!(long.starts_with(&short));
    }
}
