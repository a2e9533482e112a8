//! Avatar URL strategy.
//!
//! Call sites pick a source explicitly - generated avatars behind the
//! feature flag, a fixed image otherwise - instead of patching whatever
//! produced the previous URL. The `{size}` placeholder stays literal so
//! clients can substitute their display size.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'\\');

/// Where avatar URLs come from.
pub enum AvatarUrlSource {
    /// Computed avatars served from the render route.
    Generated { settings_version: String },
    /// A fixed template, e.g. an uploaded-avatar CDN path.
    Fixed { template: String },
}

impl AvatarUrlSource {
    /// Select the strategy from the feature flag.
    pub fn select(enabled: bool, settings_version: String) -> Self {
        if enabled {
            Self::Generated { settings_version }
        } else {
            Self::Fixed {
                template: "/fallback.png".to_string(),
            }
        }
    }

    /// Avatar URL template for a username, `{size}` left for the client.
    pub fn url_for(&self, username: &str) -> String {
        match self {
            Self::Generated { settings_version } => format!(
                "/avatar/{}/{{size}}/{}.svg",
                utf8_percent_encode(username, PATH_SEGMENT),
                settings_version
            ),
            Self::Fixed { template } => template.clone(),
        }
    }
}
