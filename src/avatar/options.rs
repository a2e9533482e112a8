//! Render options with construction-time sanitization.
//!
//! Every externally supplied value is pulled into its declared domain here,
//! once, before rendering. Out-of-range values fall back to documented
//! defaults instead of failing; `to_svg` never validates anything.

use super::color;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

pub const MIN_BLINK_INTERVAL_SECONDS: u32 = 2;
pub const MAX_BLINK_INTERVAL_SECONDS: u32 = 30;
pub const MIN_BLINK_DURATION_MS: u32 = 80;
pub const MAX_BLINK_DURATION_MS: u32 = 2000;

pub const DEFAULT_FONT_FAMILY: &str = "monospace";
pub const DEFAULT_FONT_WEIGHT: &str = "700";
pub const DEFAULT_FOREGROUND_COLOR: &str = "#000000";

/// Font families are restricted to word characters, spaces, and the
/// punctuation a CSS font list needs. Anything else falls back.
static FONT_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[\w\s,'"-]+$"#).expect("valid font family regex"));

/// Numeric CSS font weights: 100..=900 in hundreds.
static FONT_WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]00$").expect("valid font weight regex"));

/// Background rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Solid,
    /// Solid fill plus a radial highlight overlay.
    Gradient,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
        })
    }
}

/// Outer clip shape of the avatar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Square,
    Squircle,
    #[default]
    Round,
}

impl Shape {
    /// Parse a shape name, falling back to `Round` for unknown input.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "square" => Self::Square,
            "squircle" => Self::Squircle,
            _ => Self::Round,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Square => "square",
            Self::Squircle => "squircle",
            Self::Round => "round",
        })
    }
}

/// Immutable option bundle consumed by the renderer.
///
/// Build one with [`RenderOptions::sanitized`] so that every field is
/// already inside its declared domain. The engine holds no other state;
/// callers resolve a fresh bundle from configuration on every render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub variant: Variant,
    pub show_initial: bool,
    /// Hex colors; callers guarantee at least one entry.
    pub palette: Vec<String>,
    pub shape: Shape,
    pub enable_blink: bool,
    pub blink_interval_seconds: u32,
    pub blink_duration_ms: u32,
    pub font_family: String,
    pub font_weight: String,
    pub foreground_color: String,
    pub auto_foreground_contrast: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Solid,
            show_initial: true,
            palette: Vec::new(),
            shape: Shape::Round,
            enable_blink: false,
            blink_interval_seconds: 8,
            blink_duration_ms: 140,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_weight: DEFAULT_FONT_WEIGHT.to_string(),
            foreground_color: DEFAULT_FOREGROUND_COLOR.to_string(),
            auto_foreground_contrast: true,
        }
    }
}

impl RenderOptions {
    /// Pull every field into its declared domain.
    ///
    /// Fallbacks: shape -> `round`, font family -> `monospace`, font weight
    /// -> `700`, foreground color -> `#000000`, blink bounds clamped.
    pub fn sanitized(mut self) -> Self {
        self.blink_interval_seconds = self
            .blink_interval_seconds
            .clamp(MIN_BLINK_INTERVAL_SECONDS, MAX_BLINK_INTERVAL_SECONDS);
        self.blink_duration_ms = self
            .blink_duration_ms
            .clamp(MIN_BLINK_DURATION_MS, MAX_BLINK_DURATION_MS);
        self.font_family = sanitize_font_family(&self.font_family);
        self.font_weight = sanitize_font_weight(&self.font_weight);
        self.foreground_color = color::normalize_hex(&self.foreground_color)
            .unwrap_or_else(|| DEFAULT_FOREGROUND_COLOR.to_string());
        self
    }
}

/// Clamp an untrusted integer into `[min, max]`, tolerating negatives.
pub fn clamp_i64(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max)) as u32
}

/// Validate a font family list; empty or suspicious input -> `monospace`.
pub fn sanitize_font_family(value: &str) -> String {
    let candidate = value.trim();
    if candidate.is_empty() || !FONT_FAMILY.is_match(candidate) {
        return DEFAULT_FONT_FAMILY.to_string();
    }
    candidate.to_string()
}

/// Validate a font weight: CSS keyword or hundreds value, else `700`.
pub fn sanitize_font_weight(value: &str) -> String {
    let candidate = value.trim();
    if candidate.is_empty() {
        return DEFAULT_FONT_WEIGHT.to_string();
    }

    let keyword = candidate.to_ascii_lowercase();
    if matches!(keyword.as_str(), "normal" | "bold" | "bolder" | "lighter") {
        return keyword;
    }
    if FONT_WEIGHT.is_match(candidate) {
        return candidate.to_string();
    }

    DEFAULT_FONT_WEIGHT.to_string()
}
