//! `[avatar.text]` section configuration.
//!
//! Typography of the initial glyph. Accessors sanitize on read; the engine
//! sanitizes once more at request construction, so values coming from here
//! are always inside the declared domain.

use crate::avatar::color::is_hex_color;
use crate::avatar::options::{
    DEFAULT_FOREGROUND_COLOR, sanitize_font_family, sanitize_font_weight,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// CSS font family list for the initial glyph.
    pub font_family: String,

    /// CSS font weight: keyword or hundreds value.
    pub font_weight: String,

    /// Fixed foreground color, used when `auto_contrast` is off.
    pub foreground_color: String,

    /// Pick black or white automatically against the background color.
    pub auto_contrast: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: "monospace".to_string(),
            font_weight: "700".to_string(),
            foreground_color: DEFAULT_FOREGROUND_COLOR.to_string(),
            auto_contrast: true,
        }
    }
}

impl TextConfig {
    pub fn font_family(&self) -> String {
        sanitize_font_family(&self.font_family)
    }

    pub fn font_weight(&self) -> String {
        sanitize_font_weight(&self.font_weight)
    }

    pub fn foreground_color(&self) -> String {
        let candidate = self.foreground_color.trim();
        if is_hex_color(candidate) {
            candidate.to_string()
        } else {
            DEFAULT_FOREGROUND_COLOR.to_string()
        }
    }
}
