//! Seed resolution: from identity token to hash seed.
//!
//! The engine hashes whatever seed string it is given; this module decides
//! what that string is. Depending on the configured hash source, the seed is
//! either the normalized username itself or a display name looked up in an
//! optional name directory, with a TTL'd cache-aside layer in between so the
//! directory is not consulted on every avatar request.
//!
//! ```text
//! seed/
//! ├── cache      # SeedResolver: cache-aside + invalidation hooks
//! ├── directory  # NameDirectory: username -> display name map
//! └── template   # AvatarUrlSource: generated vs fixed avatar URLs
//! ```

mod cache;
mod directory;
mod template;

pub use cache::SeedResolver;
pub use directory::NameDirectory;
pub use template::AvatarUrlSource;

use serde::Serialize;

/// What string feeds the avatar hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HashSource {
    /// Hash the normalized username; never touches the directory.
    #[default]
    Username,
    /// Hash the display name, falling back to the username.
    Name,
    /// Alias of `Name` kept for configuration compatibility.
    NameOrUsername,
}

impl HashSource {
    /// Parse a configured value, falling back to `Username`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "name" => Self::Name,
            "name_or_username" => Self::NameOrUsername,
            _ => Self::Username,
        }
    }

    /// Lowercase configuration name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Name => "name",
            Self::NameOrUsername => "name_or_username",
        }
    }

    /// Whether this source consults the name directory.
    pub const fn uses_directory(self) -> bool {
        !matches!(self, Self::Username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(HashSource::parse("username"), HashSource::Username);
        assert_eq!(HashSource::parse("name"), HashSource::Name);
        assert_eq!(
            HashSource::parse("name_or_username"),
            HashSource::NameOrUsername
        );
        assert_eq!(HashSource::parse("unknown"), HashSource::Username);
        assert_eq!(HashSource::parse(""), HashSource::Username);
    }

    #[test]
    fn test_uses_directory() {
        assert!(!HashSource::Username.uses_directory());
        assert!(HashSource::Name.uses_directory());
        assert!(HashSource::NameOrUsername.uses_directory());
    }
}
