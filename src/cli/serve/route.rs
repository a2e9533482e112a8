//! Avatar route parsing.
//!
//! Route shape: `GET /avatar/:seed/:size/:version.svg`. The version segment
//! is not checked against the current settings version - URLs are immutable
//! once issued, and a stale version simply names the same avatar an old page
//! still embeds.

use crate::cli::{MAX_SIZE, MIN_SIZE};
use percent_encoding::percent_decode_str;

/// Longest accepted seed, in bytes after decoding.
const MAX_SEED_BYTES: usize = 120;

/// A parsed avatar request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRoute {
    /// Normalized (trimmed, lowercased) username segment.
    pub username: String,
    /// Requested edge length, already bounds-checked.
    pub size: u32,
}

/// Parse an avatar URL; any malformed segment yields `None`.
pub fn parse(url: &str) -> Option<AvatarRoute> {
    let path = url.split('?').next().unwrap_or(url);
    let rest = path.strip_prefix("/avatar/")?;

    let mut segments = rest.split('/');
    let seed = segments.next()?;
    let size = segments.next()?;
    let version_file = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let version = version_file.strip_suffix(".svg")?;
    if version.is_empty() || !version.bytes().all(is_version_byte) {
        return None;
    }

    let size: u32 = size.parse().ok()?;
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return None;
    }

    let decoded = percent_decode_str(seed).decode_utf8().ok()?;
    let username = normalize_username(&decoded)?;

    Some(AvatarRoute { username, size })
}

fn is_version_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Normalize a decoded seed segment.
///
/// Rejects empty, oversized, and structurally hostile seeds; everything
/// else lowercases so equivalent usernames share one cache entry.
fn normalize_username(raw: &str) -> Option<String> {
    let candidate = raw.trim();
    if candidate.is_empty() || candidate.len() > MAX_SEED_BYTES {
        return None;
    }
    if candidate.contains('/') || candidate.chars().any(char::is_control) {
        return None;
    }
    Some(candidate.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_route() {
        let route = parse("/avatar/alice/64/a1b2c3d4e5f60718.svg").unwrap();
        assert_eq!(route.username, "alice");
        assert_eq!(route.size, 64);
    }

    #[test]
    fn test_parse_lowercases_username() {
        let route = parse("/avatar/Alice/64/v1.svg").unwrap();
        assert_eq!(route.username, "alice");
    }

    #[test]
    fn test_parse_percent_decodes() {
        let route = parse("/avatar/%E6%97%A5%E6%9C%AC/64/v1.svg").unwrap();
        assert_eq!(route.username, "日本");
    }

    #[test]
    fn test_parse_strips_query() {
        assert!(parse("/avatar/alice/64/v1.svg?cb=2").is_some());
    }

    #[test]
    fn test_size_bounds() {
        assert!(parse("/avatar/alice/8/v1.svg").is_some());
        assert!(parse("/avatar/alice/1000/v1.svg").is_some());
        assert!(parse("/avatar/alice/7/v1.svg").is_none());
        assert!(parse("/avatar/alice/1001/v1.svg").is_none());
        assert!(parse("/avatar/alice/64x/v1.svg").is_none());
        assert!(parse("/avatar/alice/-1/v1.svg").is_none());
    }

    #[test]
    fn test_malformed_paths_rejected() {
        assert!(parse("/avatar/alice/64/v1.png").is_none());
        assert!(parse("/avatar/alice/64/.svg").is_none());
        assert!(parse("/avatar/alice/64/v 1.svg").is_none());
        assert!(parse("/avatar/alice/64").is_none());
        assert!(parse("/avatar/alice/64/v1.svg/extra").is_none());
        assert!(parse("/other/alice/64/v1.svg").is_none());
    }

    #[test]
    fn test_hostile_seeds_rejected() {
        assert!(parse("/avatar/%20%20/64/v1.svg").is_none()); // whitespace-only
        assert!(parse("/avatar/a%2Fb/64/v1.svg").is_none()); // encoded slash
        assert!(parse("/avatar/a%00b/64/v1.svg").is_none()); // control char
        let long = "a".repeat(MAX_SEED_BYTES + 1);
        assert!(parse(&format!("/avatar/{long}/64/v1.svg")).is_none());
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert!(parse("/avatar/%ff%fe/64/v1.svg").is_none());
    }
}
