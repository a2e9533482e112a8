//! Configuration management for `facehash.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── avatar     # [avatar] plus nested text/blink
//! │   ├── blink      # [avatar.blink]
//! │   ├── text       # [avatar.text]
//! │   └── serve      # [serve]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── handle     # Global config handle (arc-swap)
//! └── mod.rs         # Config root (this file)
//! ```
//!
//! A missing config file is not an error - every field has a default and
//! every accessor sanitizes on read. The only hard failures are unreadable
//! files and broken TOML syntax.

pub mod section;
pub mod types;

// Re-export from section/
pub use section::{AvatarConfig, BlinkConfig, DEFAULT_PALETTE, ServeConfig, TextConfig};

// Re-export from types/
pub use types::{ConfigError, cfg, init_config, reload_config};

use crate::avatar::RenderOptions;
use crate::cli::{Cli, Commands};
use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Root configuration structure representing facehash.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: std::path::PathBuf,

    /// Avatar rendering settings
    pub avatar: AvatarConfig,

    /// HTTP server settings
    pub serve: ServeConfig,
}

impl Config {
    /// Load configuration from CLI arguments.
    ///
    /// A missing file yields the defaults; unknown fields are warned about
    /// and ignored.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let path = &cli.config;

        let mut config = if path.exists() {
            Self::from_path(path)?
        } else {
            debug!("config"; "'{}' not found, using defaults", path.display());
            Self::default()
        };

        config.config_path = path.clone();
        config.cli = Some(cli);
        config.apply_command_options(cli);
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring:", path.display());
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Apply command-specific overrides from the CLI.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        if let Commands::Serve { interface, port } = &cli.command {
            if let Some(interface) = interface {
                self.serve.interface = *interface;
            }
            if let Some(port) = port {
                self.serve.port = *port;
            }
        }
    }

    /// Resolve the immutable option bundle for one render.
    ///
    /// The engine holds no configuration state; callers resolve a fresh
    /// bundle from the current snapshot for every render.
    pub fn render_options(&self) -> RenderOptions {
        let avatar = &self.avatar;
        RenderOptions {
            variant: avatar.variant(),
            show_initial: avatar.show_initial,
            palette: avatar.colors(),
            shape: avatar.shape(),
            enable_blink: avatar.blink.enable,
            blink_interval_seconds: avatar.blink.interval_seconds(),
            blink_duration_ms: avatar.blink.duration_ms(),
            font_family: avatar.text.font_family(),
            font_weight: avatar.text.font_weight(),
            foreground_color: avatar.text.foreground_color(),
            auto_foreground_contrast: avatar.text.auto_contrast,
        }
    }

    /// Opaque fingerprint of every rendering-affecting option.
    ///
    /// Embedded in avatar URLs and ETags: any option change produces new
    /// URLs, so year-long immutable caching stays safe.
    pub fn settings_version(&self) -> String {
        let avatar = &self.avatar;
        let payload = [
            env!("CARGO_PKG_VERSION").to_string(),
            avatar.variant().to_string(),
            avatar.show_initial.to_string(),
            avatar.blink.enable.to_string(),
            avatar.blink.interval_seconds().to_string(),
            avatar.blink.duration_ms().to_string(),
            avatar.hash_source().name().to_string(),
            avatar.shape().to_string(),
            avatar.text.font_family(),
            avatar.text.font_weight(),
            avatar.text.auto_contrast.to_string(),
            avatar.text.foreground_color(),
            avatar.colors().join(","),
        ]
        .join("|");

        crate::utils::hash::fingerprint(&payload, 16)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snippet. Panics if there are unknown fields
/// (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let (parsed, ignored) = Config::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
