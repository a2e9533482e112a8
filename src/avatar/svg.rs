//! SVG document composition.
//!
//! Builds the avatar markup in one fixed order: root, optional blink style,
//! defs, clipped background, face group, optional initial. All layout values
//! derive from the request size; nothing is hardcoded to a pixel grid.

use super::blink;
use super::color::contrast_foreground;
use super::select::DerivedChoice;
use super::options::{Shape, Variant};
use super::RenderRequest;
use crate::utils::fmt::fmt3;
use crate::utils::xml::escape;
use std::fmt::Write;

/// Face box width as a fraction of the avatar edge.
const FACE_WIDTH_RATIO: f64 = 0.6;
/// Vertical anchor of the face center.
const FACE_ANCHOR_RATIO: f64 = 0.36;
/// Magnitude of the rotation nudge.
const OFFSET_RATIO: f64 = 0.05;
/// Baseline of the initial glyph.
const TEXT_BASELINE_RATIO: f64 = 0.76;
/// Font size of the initial glyph.
const FONT_SIZE_RATIO: f64 = 0.26;

/// Render a request into a complete SVG document.
pub fn compose(request: &RenderRequest, choice: &DerivedChoice) -> String {
    let options = &request.options;
    let size = f64::from(request.size);
    let geometry = choice.face.geometry();

    let face_width = size * FACE_WIDTH_RATIO;
    let face_height = face_width / geometry.aspect_ratio();

    // The rotation pose shows up in the static render only as this nudge;
    // the full pose is exported as data attributes for the hover runtime.
    let offset = size * OFFSET_RATIO;
    let offset_x = f64::from(choice.rotation.y) * offset;
    let offset_y = f64::from(-choice.rotation.x) * offset;

    let face_x = (size - face_width) / 2.0 + offset_x;
    let face_y = size * FACE_ANCHOR_RATIO - face_height / 2.0 + offset_y;
    let font_size = size * FONT_SIZE_RATIO;
    let text_y = size * TEXT_BASELINE_RATIO + offset_y;

    let id_seed = request.content_id();
    let gradient_id = format!("facehash-gradient-{id_seed}");
    let clip_id = format!("facehash-clip-{id_seed}");
    let blink_id = format!("facehash-blink-{id_seed}");

    let foreground: &str = if options.auto_foreground_contrast {
        contrast_foreground(&choice.color)
    } else {
        options.foreground_color.as_str()
    };

    let mut svg = String::with_capacity(2048);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" role="img" aria-label="Facehash avatar" data-facehash="">"#,
        size = request.size,
    );

    let timeline = options
        .enable_blink
        .then(|| blink::timeline(&request.seed, options.blink_interval_seconds, options.blink_duration_ms));
    if let Some(timeline) = &timeline {
        svg.push_str(&blink_style(&blink_id, timeline));
    }

    let mut defs = String::new();
    if options.variant == Variant::Gradient {
        let _ = write!(
            defs,
            r##"<radialGradient id="{gradient_id}" cx="50%" cy="50%" r="70%"><stop offset="0%" stop-color="#ffffff" stop-opacity="0.15" /><stop offset="60%" stop-color="#ffffff" stop-opacity="0" /></radialGradient>"##,
        );
    }
    if options.shape != Shape::Square {
        defs.push_str(&clip_markup(options.shape, &clip_id, size));
    }
    if !defs.is_empty() {
        let _ = write!(svg, "<defs>{defs}</defs>");
    }

    if options.shape == Shape::Square {
        svg.push_str("<g>");
    } else {
        let _ = write!(svg, r##"<g clip-path="url(#{clip_id})">"##);
    }

    // Background: solid fill, plus the highlight overlay in gradient mode.
    let _ = write!(
        svg,
        r#"<g data-facehash-bg=""><rect width="100%" height="100%" fill="{}" />"#,
        choice.color,
    );
    if options.variant == Variant::Gradient {
        let _ = write!(
            svg,
            r##"<rect width="100%" height="100%" fill="url(#{gradient_id})" data-facehash-gradient="" />"##,
        );
    }
    svg.push_str("</g>");

    // The rotation attributes are emitted unconditionally: the inline
    // runtime reads them even when blink and gradient are off.
    let _ = write!(
        svg,
        r#"<g data-facehash-face="" data-facehash-rotation-x="{}" data-facehash-rotation-y="{}">"#,
        choice.rotation.x, choice.rotation.y,
    );

    match &timeline {
        Some(timeline) => {
            let _ = write!(
                svg,
                r#"<g data-facehash-eyes="" class="{blink_id}" style="animation-duration:{}s;animation-delay:-{}s;">"#,
                fmt3(timeline.interval_seconds),
                fmt3(timeline.delay_seconds),
            );
        }
        None => svg.push_str(r#"<g data-facehash-eyes="">"#),
    }

    let _ = write!(
        svg,
        r#"<svg x="{}" y="{}" width="{}" height="{}" viewBox="{}" fill="none" aria-hidden="true">"#,
        fmt3(face_x),
        fmt3(face_y),
        fmt3(face_width),
        fmt3(face_height),
        geometry.view_box,
    );
    for path in geometry.paths {
        let _ = write!(svg, r#"<path d="{path}" fill="{foreground}" />"#);
    }
    svg.push_str("</svg></g>");

    if options.show_initial {
        let _ = write!(
            svg,
            r#"<text data-facehash-initial="" x="50%" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="{}" font-weight="{}" font-size="{}" fill="{foreground}">{}</text>"#,
            fmt3(text_y),
            escape(&options.font_family),
            escape(&options.font_weight),
            fmt3(font_size),
            escape(&choice.initial),
        );
    }

    svg.push_str("</g></g></svg>");
    svg
}

/// Clip path definition for non-square shapes.
fn clip_markup(shape: Shape, clip_id: &str, size: f64) -> String {
    match shape {
        Shape::Round => {
            let radius = size / 2.0;
            format!(
                r#"<clipPath id="{clip_id}"><circle cx="{r}" cy="{r}" r="{r}" /></clipPath>"#,
                r = fmt3(radius),
            )
        }
        Shape::Squircle => {
            let corner = fmt3(size * 0.28);
            format!(
                r#"<clipPath id="{clip_id}"><rect width="{size}" height="{size}" rx="{corner}" ry="{corner}" /></clipPath>"#,
                size = fmt3(size),
            )
        }
        Shape::Square => String::new(),
    }
}

/// Keyframe and class rules for the blink animation.
fn blink_style(blink_id: &str, timeline: &blink::BlinkTimeline) -> String {
    let close_start = fmt3(timeline.close_start * 100.0);
    let close_mid = fmt3((timeline.close_start + timeline.close_end) / 2.0 * 100.0);
    let close_end = fmt3(timeline.close_end * 100.0);

    format!(
        "<style>@keyframes {blink_id} {{ 0%, {close_start}%, 100% {{ transform: scaleY(1); }} \
         {close_mid}% {{ transform: scaleY(0.08); }} \
         {close_end}% {{ transform: scaleY(1); }} }} \
         .{blink_id} {{ transform-box: fill-box; transform-origin: center; \
         animation-name: {blink_id}; animation-timing-function: ease-in-out; \
         animation-iteration-count: infinite; }}</style>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::options::RenderOptions;

    fn options() -> RenderOptions {
        RenderOptions {
            palette: vec!["#111111".into(), "#222222".into(), "#333333".into()],
            ..RenderOptions::default()
        }
        .sanitized()
    }

    fn render(seed: &str, size: u32, options: RenderOptions) -> String {
        RenderRequest::new(seed, size, options).to_svg()
    }

    #[test]
    fn test_byte_identical_renders() {
        let first = render("alice", 64, options());
        let second = render("alice", 64, options());
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_to_end_alice_gradient() {
        let svg = render(
            "alice",
            64,
            RenderOptions {
                variant: Variant::Gradient,
                ..options()
            },
        );

        assert_eq!(svg.matches("<svg xmlns=").count(), 1);
        assert!(svg.contains(r#"width="64" height="64" viewBox="0 0 64 64""#));
        assert_eq!(svg.matches("<radialGradient").count(), 1);
        assert!(svg.contains(r#"<text data-facehash-initial="#));
        assert!(svg.contains(">A</text>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_rotation_attributes_always_present() {
        // The hover runtime depends on these even with everything disabled.
        let svg = render(
            "alice",
            64,
            RenderOptions {
                show_initial: false,
                enable_blink: false,
                ..options()
            },
        );
        assert!(svg.contains(r#"data-facehash-rotation-x="-1""#));
        assert!(svg.contains(r#"data-facehash-rotation-y="1""#));
    }

    #[test]
    fn test_show_initial_toggle_only_removes_text() {
        let with = render("alice", 64, options());
        let without = render(
            "alice",
            64,
            RenderOptions {
                show_initial: false,
                ..options()
            },
        );
        assert!(with.contains("<text"));
        assert!(!without.contains("<text"));
        // Everything before the text element is unchanged.
        let prefix = &with[..with.find("<text").unwrap()];
        assert!(without.starts_with(prefix));
    }

    #[test]
    fn test_blink_toggle_only_adds_style() {
        let without = render("alice", 64, options());
        let with = render(
            "alice",
            64,
            RenderOptions {
                enable_blink: true,
                ..options()
            },
        );
        assert!(!without.contains("<style>"));
        assert_eq!(with.matches("<style>").count(), 1);
        assert!(with.contains("@keyframes facehash-blink-"));
        assert!(with.contains("animation-duration:"));
        assert!(with.contains("animation-delay:-"));
    }

    #[test]
    fn test_gradient_adds_one_def_and_one_overlay() {
        let solid = render("alice", 64, options());
        let gradient = render(
            "alice",
            64,
            RenderOptions {
                variant: Variant::Gradient,
                ..options()
            },
        );
        assert_eq!(solid.matches("<radialGradient").count(), 0);
        assert_eq!(solid.matches("data-facehash-gradient").count(), 0);
        assert_eq!(gradient.matches("<radialGradient").count(), 1);
        assert_eq!(gradient.matches("data-facehash-gradient").count(), 1);
    }

    #[test]
    fn test_shape_law() {
        let square = render(
            "alice",
            64,
            RenderOptions {
                shape: Shape::Square,
                ..options()
            },
        );
        assert!(!square.contains("<clipPath"));
        assert!(!square.contains("clip-path"));

        let round = render("alice", 64, options());
        assert!(round.contains("<clipPath"));
        assert!(round.contains(r#"<circle cx="32" cy="32" r="32" />"#));

        let squircle = render(
            "alice",
            64,
            RenderOptions {
                shape: Shape::Squircle,
                ..options()
            },
        );
        assert!(squircle.contains(r#"rx="17.92" ry="17.92""#));
    }

    #[test]
    fn test_contrast_law() {
        let dark = render(
            "alice",
            64,
            RenderOptions {
                palette: vec!["#000000".into()],
                ..RenderOptions::default()
            },
        );
        assert!(dark.contains(r##"fill="#ffffff""##));

        let light = render(
            "alice",
            64,
            RenderOptions {
                palette: vec!["#ffffff".into()],
                ..RenderOptions::default()
            },
        );
        assert!(light.contains(r##"fill="#000000""##));
    }

    #[test]
    fn test_manual_foreground_color() {
        let svg = render(
            "alice",
            64,
            RenderOptions {
                auto_foreground_contrast: false,
                foreground_color: "#ff5555".into(),
                ..options()
            }
            .sanitized(),
        );
        assert!(svg.contains(r##"fill="#ff5555""##));
    }

    #[test]
    fn test_escaping_of_user_text() {
        let svg = render("<script>&", 64, options());
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;"));

        let svg = render(
            "alice",
            64,
            RenderOptions {
                // Passes the font family pattern but still needs escaping.
                font_family: r#"Geist "Pixel", monospace"#.into(),
                ..options()
            }
            .sanitized(),
        );
        assert!(svg.contains("&quot;Pixel&quot;"));
        assert!(!svg.contains(r#"font-family="Geist "Pixel""#));
    }

    #[test]
    fn test_ids_stable_per_request_distinct_across() {
        let first = render("alice", 64, options());
        let second = render("alice", 64, options());
        let other = render("bob", 64, options());

        let id_of = |svg: &str| {
            let start = svg.find("facehash-clip-").unwrap();
            svg[start..start + 24].to_string()
        };
        assert_eq!(id_of(&first), id_of(&second));
        assert_ne!(id_of(&first), id_of(&other));
    }

    #[test]
    fn test_size_drives_layout() {
        let svg = render("alice", 100, options());
        // Face box: 60 wide; round face aspect 63/15 -> height 14.286.
        assert!(svg.contains(r#"width="60" height="14.286""#));
        // Font size 26, baseline 0.76 * 100 + offset.
        assert!(svg.contains(r#"font-size="26""#));
    }
}
