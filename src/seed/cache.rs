//! Cache-aside seed resolution.
//!
//! Resolving a seed in the name-based modes means a directory lookup per
//! avatar request; this layer memoizes the result per
//! `(version, hash source, names-enabled flag, username)` fingerprint with a
//! TTL, and exposes explicit invalidation hooks fired when the directory
//! changes. Username mode bypasses the cache entirely.

use super::{HashSource, NameDirectory};
use arc_swap::ArcSwapOption;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a resolved seed stays valid without an invalidation event.
const SEED_TTL: Duration = Duration::from_secs(60 * 60);

/// Flag values a cache key can carry; invalidation sweeps all of them.
const NAMES_ENABLED_KEYS: [&str; 2] = ["1", "0"];

struct CachedSeed {
    seed: String,
    expires_at: Instant,
}

/// Thread-safe seed resolver shared by all request handlers.
#[derive(Default)]
pub struct SeedResolver {
    directory: ArcSwapOption<NameDirectory>,
    cache: DashMap<String, CachedSeed>,
}

impl SeedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the hash seed for a normalized (lowercase) username.
    ///
    /// Total: every failure path falls back to the username itself.
    pub fn resolve(&self, username: &str, source: HashSource, names_enabled: bool) -> String {
        if !source.uses_directory() {
            return username.to_string();
        }

        let key = cache_key(username, source, names_enabled);
        if let Some(entry) = self.cache.get(&key)
            && entry.expires_at > Instant::now()
        {
            return entry.seed.clone();
        }

        let seed = self.lookup(username, names_enabled);
        self.cache.insert(
            key,
            CachedSeed {
                seed: seed.clone(),
                expires_at: Instant::now() + SEED_TTL,
            },
        );
        seed
    }

    /// Uncached lookup behind the cache-aside layer.
    fn lookup(&self, username: &str, names_enabled: bool) -> String {
        if !names_enabled {
            return username.to_string();
        }

        match self.directory.load().as_deref() {
            Some(directory) => directory
                .display_name(username)
                .unwrap_or(username)
                .to_string(),
            None => username.to_string(),
        }
    }

    /// Drop every cached seed for one username, across all key variants.
    pub fn invalidate(&self, username: &str) {
        let username = username.to_lowercase();
        for source in [HashSource::Name, HashSource::NameOrUsername] {
            for flag in NAMES_ENABLED_KEYS {
                self.cache
                    .remove(&format!("{}/{}/{}/{}", version(), source.name(), flag, username));
            }
        }
    }

    /// Drop the whole cache (settings changes can move every seed).
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Swap in a new directory, invalidating users whose name changed.
    pub fn set_directory(&self, directory: Option<NameDirectory>) {
        let new = directory.map(Arc::new);
        let old = self.directory.swap(new.clone());

        match (old.as_deref(), new.as_deref()) {
            (Some(old), Some(new)) => {
                for username in old.changed_usernames(new) {
                    self.invalidate(&username);
                }
            }
            (None, None) => {}
            // Gaining or losing the directory can move any seed.
            _ => self.clear(),
        }
    }

    #[cfg(test)]
    fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

fn cache_key(username: &str, source: HashSource, names_enabled: bool) -> String {
    format!(
        "{}/{}/{}/{}",
        version(),
        source.name(),
        if names_enabled { "1" } else { "0" },
        username
    )
}

fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn directory(entries: &[(&str, &str)]) -> NameDirectory {
        NameDirectory::from_entries(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<FxHashMap<_, _>>(),
        )
    }

    #[test]
    fn test_username_mode_bypasses_cache() {
        let resolver = SeedResolver::new();
        assert_eq!(
            resolver.resolve("alice", HashSource::Username, true),
            "alice"
        );
        assert_eq!(resolver.cached_len(), 0);
    }

    #[test]
    fn test_name_mode_uses_directory() {
        let resolver = SeedResolver::new();
        resolver.set_directory(Some(directory(&[("alice", "Alice Liddell")])));

        assert_eq!(
            resolver.resolve("alice", HashSource::Name, true),
            "Alice Liddell"
        );
        // Unknown users fall back to their username.
        assert_eq!(resolver.resolve("bob", HashSource::Name, true), "bob");
        assert_eq!(resolver.cached_len(), 2);
    }

    #[test]
    fn test_names_disabled_forces_username() {
        let resolver = SeedResolver::new();
        resolver.set_directory(Some(directory(&[("alice", "Alice Liddell")])));
        assert_eq!(resolver.resolve("alice", HashSource::Name, false), "alice");
    }

    #[test]
    fn test_cache_hit_survives_directory_swap_without_invalidation() {
        let resolver = SeedResolver::new();
        resolver.set_directory(Some(directory(&[("alice", "Alice Liddell")])));
        assert_eq!(
            resolver.resolve("alice", HashSource::Name, true),
            "Alice Liddell"
        );

        // Same content: cached value remains valid.
        resolver.set_directory(Some(directory(&[("alice", "Alice Liddell")])));
        assert_eq!(
            resolver.resolve("alice", HashSource::Name, true),
            "Alice Liddell"
        );
    }

    #[test]
    fn test_directory_change_invalidates_changed_user() {
        let resolver = SeedResolver::new();
        resolver.set_directory(Some(directory(&[
            ("alice", "Alice Liddell"),
            ("bob", "Bob"),
        ])));
        assert_eq!(
            resolver.resolve("alice", HashSource::Name, true),
            "Alice Liddell"
        );
        assert_eq!(resolver.resolve("bob", HashSource::Name, true), "Bob");

        resolver.set_directory(Some(directory(&[
            ("alice", "Alice Pleasance"),
            ("bob", "Bob"),
        ])));
        assert_eq!(
            resolver.resolve("alice", HashSource::Name, true),
            "Alice Pleasance"
        );
        assert_eq!(resolver.resolve("bob", HashSource::Name, true), "Bob");
    }

    #[test]
    fn test_explicit_invalidate() {
        let resolver = SeedResolver::new();
        resolver.set_directory(Some(directory(&[("alice", "Alice Liddell")])));
        resolver.resolve("alice", HashSource::Name, true);
        assert_eq!(resolver.cached_len(), 1);

        resolver.invalidate("ALICE");
        assert_eq!(resolver.cached_len(), 0);
    }

    #[test]
    fn test_clear() {
        let resolver = SeedResolver::new();
        resolver.resolve("alice", HashSource::Name, true);
        resolver.resolve("bob", HashSource::NameOrUsername, true);
        resolver.clear();
        assert_eq!(resolver.cached_len(), 0);
    }

    #[test]
    fn test_losing_directory_clears_cache() {
        let resolver = SeedResolver::new();
        resolver.set_directory(Some(directory(&[("alice", "Alice Liddell")])));
        resolver.resolve("alice", HashSource::Name, true);

        resolver.set_directory(None);
        assert_eq!(resolver.cached_len(), 0);
        assert_eq!(resolver.resolve("alice", HashSource::Name, true), "alice");
    }
}
