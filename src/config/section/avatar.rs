//! `[avatar]` section configuration.
//!
//! Raw values deserialize as-is; every accessor sanitizes on read so that a
//! broken `facehash.toml` degrades to defaults instead of refusing to start.
//!
//! # Example
//!
//! ```toml
//! [avatar]
//! enabled = true
//! palette = ["#ff5555", "#2a9d8f", "#3a8fd4"]
//! gradient_overlay = true    # radial highlight over the solid fill
//! show_initial = true
//! shape = "squircle"         # square | squircle | round
//! hash_source = "username"   # username | name | name_or_username
//! ```
//!
//! `palette` also accepts one separator-joined string
//! (`"#ff5555, #2a9d8f"`), the format browser extensions tend to export.

use super::blink::BlinkConfig;
use super::text::TextConfig;
use crate::avatar::color::is_hex_color;
use crate::avatar::{Shape, Variant};
use crate::seed::HashSource;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Upper bound on configured palette entries.
const MAX_COLORS: usize = 32;

/// Built-in palette used when the configured one is empty or all-invalid.
pub const DEFAULT_PALETTE: [&str; 16] = [
    "#ff5555", "#ff79c6", "#bd93f9", "#644ac9", "#6272a4", "#e06b4a", "#d4813f", "#c49b2a",
    "#4aad5b", "#2a9d8f", "#3a8fd4", "#e05a8a", "#9b6ed0", "#5b8c6e", "#c75a8a", "#4a90a4",
];

/// Separators accepted in a joined palette string.
static PALETTE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n,|\s]+").expect("valid separator regex"));

/// Palette field: either a proper TOML list or one joined string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    List(Vec<String>),
    Joined(String),
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl PaletteSpec {
    /// Raw candidate entries before sanitization.
    fn candidates(&self) -> Vec<String> {
        match self {
            Self::List(entries) => entries.clone(),
            Self::Joined(joined) => PALETTE_SEPARATORS
                .split(joined)
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Master switch: disabled means every request gets the fallback image.
    pub enabled: bool,

    /// Background color candidates (see module docs for accepted forms).
    pub palette: PaletteSpec,

    /// Draw a radial highlight overlay above the solid background.
    pub gradient_overlay: bool,

    /// Draw the uppercased first grapheme of the seed.
    pub show_initial: bool,

    /// Outer clip shape: square | squircle | round.
    pub shape: String,

    /// What string feeds the hash: username | name | name_or_username.
    pub hash_source: String,

    /// Initial-glyph typography.
    pub text: TextConfig,

    /// Blink animation settings.
    pub blink: BlinkConfig,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            palette: PaletteSpec::default(),
            gradient_overlay: false,
            show_initial: true,
            shape: "round".to_string(),
            hash_source: "username".to_string(),
            text: TextConfig::default(),
            blink: BlinkConfig::default(),
        }
    }
}

impl AvatarConfig {
    /// Sanitized palette: trimmed, unquoted, lowercased, hex-validated,
    /// deduplicated, capped at 32 entries. Empty result -> built-in palette.
    pub fn colors(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for candidate in self.palette.candidates() {
            let color = candidate
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_ascii_lowercase();
            if color.is_empty() || !is_hex_color(&color) || seen.contains(&color) {
                continue;
            }
            seen.push(color);
            if seen.len() == MAX_COLORS {
                break;
            }
        }

        if seen.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            seen
        }
    }

    pub fn variant(&self) -> Variant {
        if self.gradient_overlay {
            Variant::Gradient
        } else {
            Variant::Solid
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::parse(&self.shape)
    }

    pub fn hash_source(&self) -> HashSource {
        HashSource::parse(&self.hash_source)
    }
}
