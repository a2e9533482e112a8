//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `serve` - Dev server assets (demo page, client runtime, fallback image)
//!
//! # Usage
//!
//! ```ignore
//! use embed::serve::{DEMO_HTML, DemoVars};
//!
//! let html = DEMO_HTML.render(&DemoVars {
//!     settings_version: "a1b2c3d4e5f60718".to_string(),
//!     avatar_grid: "<figure>...</figure>".to_string(),
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod serve {
    use super::{Template, TemplateVars};

    /// Variables for demo.html.
    pub struct DemoVars {
        pub settings_version: String,
        /// Pre-rendered `<figure>` cells, one per sample seed.
        pub avatar_grid: String,
    }

    impl TemplateVars for DemoVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__VERSION__", env!("CARGO_PKG_VERSION"))
                .replace("__SETTINGS_VERSION__", &self.settings_version)
                .replace("__AVATAR_GRID__", &self.avatar_grid)
        }
    }

    /// Demo page template listing sample avatars.
    pub const DEMO_HTML: Template<DemoVars> = Template::new(include_str!("serve/demo.html"));

    /// Client runtime: swaps avatar `<img>` elements for inline SVG and
    /// adds the rotation-driven hover tilt.
    pub const RUNTIME_JS: &str = include_str!("serve/runtime.js");

    /// Static raster fallback served for any failed avatar request.
    pub const FALLBACK_PNG: &[u8] = include_bytes!("fallback/avatar.png");
}
