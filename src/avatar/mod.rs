//! The avatar rendering engine.
//!
//! A pure mapping from `(seed, options)` to a self-contained SVG document:
//!
//! ```text
//! avatar/
//! ├── hash       # 32-bit seed hash (compatibility contract)
//! ├── select     # face / color / rotation / initial derivation
//! ├── face       # static face-geometry tables
//! ├── options    # RenderOptions with construction-time sanitization
//! ├── color      # hex parsing and YIQ contrast
//! ├── blink      # deterministic blink timing
//! └── svg        # markup composition (this module's `to_svg`)
//! ```
//!
//! The engine holds no process-wide state, performs no I/O, and never
//! fails for out-of-domain option values - they are sanitized when the
//! request is constructed. Two requests with identical fields produce
//! byte-identical documents; the HTTP layer's cache validators rely on it.

pub mod blink;
pub mod color;
pub mod face;
pub mod hash;
pub mod options;
pub mod select;
mod svg;

pub use options::{RenderOptions, Shape, Variant};
pub use select::DerivedChoice;

use crate::utils::hash::fingerprint;

/// Length of the content id suffix used for SVG def ids.
const CONTENT_ID_LEN: usize = 10;

/// One avatar render: a seed plus a sanitized option bundle.
///
/// Immutable after construction; rendering is a pure function of the
/// fields. Construct per call - nothing is cached across renders.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub seed: String,
    /// Edge length of the square output in pixels. Callers bound this
    /// before constructing the request; the engine renders any value.
    pub size: u32,
    pub options: RenderOptions,
}

impl RenderRequest {
    /// Build a request, pulling the options into their declared domain.
    pub fn new(seed: impl Into<String>, size: u32, options: RenderOptions) -> Self {
        Self {
            seed: seed.into(),
            size,
            options: options.sanitized(),
        }
    }

    /// Discrete choices the seed hash selects for this request.
    pub fn derived(&self) -> DerivedChoice {
        select::derive(&self.seed, &self.options.palette)
    }

    /// Short content hash shared by the gradient/clip/blink element ids.
    ///
    /// Stable for identical requests (repeated renders reuse ids, keeping
    /// output byte-identical) and distinct across requests (no id clashes
    /// when several avatars are inlined into one page).
    pub fn content_id(&self) -> String {
        let payload = format!(
            "{}|{}|{}|{}",
            self.seed, self.size, self.options.variant, self.options.shape
        );
        fingerprint(&payload, CONTENT_ID_LEN)
    }

    /// Render the complete SVG document.
    pub fn to_svg(&self) -> String {
        svg::compose(self, &self.derived())
    }
}
