//! Username -> display name directory.
//!
//! A flat TOML map, the stand-in for whatever identity store fronts this
//! service:
//!
//! ```toml
//! alice = "Alice Liddell"
//! bob = "Bob der Baumeister"
//! ```

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::path::Path;

/// In-memory display-name lookup, keyed by lowercase username.
#[derive(Debug, Default)]
pub struct NameDirectory {
    names: FxHashMap<String, String>,
}

impl NameDirectory {
    /// Load a directory from a TOML map file.
    ///
    /// Keys are lowercased; blank display names are dropped so lookups fall
    /// back to the username instead of hashing an empty seed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read names file {}", path.display()))?;
        let raw: FxHashMap<String, String> = toml::from_str(&content)
            .with_context(|| format!("failed to parse names file {}", path.display()))?;
        Ok(Self::from_entries(raw))
    }

    /// Build a directory from raw entries (used by load and tests).
    pub fn from_entries(entries: FxHashMap<String, String>) -> Self {
        let names = entries
            .into_iter()
            .filter_map(|(username, name)| {
                let name = name.trim().to_string();
                if name.is_empty() {
                    None
                } else {
                    Some((username.trim().to_lowercase(), name))
                }
            })
            .collect();
        Self { names }
    }

    /// Display name for a normalized (lowercase) username.
    pub fn display_name(&self, username: &str) -> Option<&str> {
        self.names.get(username).map(String::as_str)
    }

    /// Usernames whose display name differs between two directories.
    ///
    /// Drives targeted cache invalidation on directory reload.
    pub fn changed_usernames(&self, other: &Self) -> Vec<String> {
        let mut changed: Vec<String> = self
            .names
            .iter()
            .filter(|(username, name)| other.names.get(*username) != Some(name))
            .map(|(username, _)| username.clone())
            .collect();
        for username in other.names.keys() {
            if !self.names.contains_key(username) {
                changed.push(username.clone());
            }
        }
        changed
    }
}
