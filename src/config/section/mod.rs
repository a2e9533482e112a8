//! Configuration section definitions.

mod avatar;
mod blink;
mod serve;
mod text;

pub use avatar::{AvatarConfig, DEFAULT_PALETTE, PaletteSpec};
pub use blink::BlinkConfig;
pub use serve::ServeConfig;
pub use text::TextConfig;
