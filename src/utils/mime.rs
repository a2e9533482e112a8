//! MIME type constants for HTTP responses.

pub const SVG: &str = "image/svg+xml";
pub const PNG: &str = "image/png";
pub const HTML: &str = "text/html; charset=utf-8";
pub const JAVASCRIPT: &str = "text/javascript; charset=utf-8";
pub const PLAIN: &str = "text/plain; charset=utf-8";
