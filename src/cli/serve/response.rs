//! HTTP response handlers.
//!
//! The avatar route only ever answers 200 or 304: every failure becomes the
//! embedded fallback image with a short cache lifetime, so broken seeds and
//! internal errors never bubble to the page as broken images.

use crate::embed::serve::FALLBACK_PNG;
use crate::utils::mime;
use anyhow::Result;
use tiny_http::{Header, Request, Response, StatusCode};

/// Cache policy for successful avatar responses; URLs embed the settings
/// version, so they can be cached for a year and never revalidated.
const CACHE_IMMUTABLE: &str = "public, immutable, max-age=31536000";

/// Cache policy for the fallback image: short, so recovered avatars
/// reappear quickly.
const CACHE_FALLBACK: &str = "public, max-age=600";

/// Fixed Last-Modified for the fallback image (it never changes).
const FALLBACK_LAST_MODIFIED: &str = "Mon, 01 Jan 1990 00:00:00 GMT";

/// Respond with a rendered SVG document.
pub fn respond_svg(request: Request, body: String, etag: &str) -> Result<()> {
    let response = Response::from_string(body)
        .with_header(make_header("Content-Type", mime::SVG))
        .with_header(make_header("Cache-Control", CACHE_IMMUTABLE))
        .with_header(make_header("X-Content-Type-Options", "nosniff"))
        .with_header(make_header("ETag", etag));
    request.respond(response)?;
    Ok(())
}

/// Respond 304 Not Modified for a matching conditional request.
pub fn respond_not_modified(request: Request, etag: &str) -> Result<()> {
    let response = Response::empty(StatusCode(304))
        .with_header(make_header("Cache-Control", CACHE_IMMUTABLE))
        .with_header(make_header("ETag", etag));
    request.respond(response)?;
    Ok(())
}

/// Respond with the static fallback image (always 200).
pub fn respond_fallback(request: Request) -> Result<()> {
    let response = Response::from_data(FALLBACK_PNG.to_vec())
        .with_header(make_header("Content-Type", mime::PNG))
        .with_header(make_header("Cache-Control", CACHE_FALLBACK))
        .with_header(make_header("Last-Modified", FALLBACK_LAST_MODIFIED));
    request.respond(response)?;
    Ok(())
}

/// Respond with the demo page.
pub fn respond_html(request: Request, body: String) -> Result<()> {
    let response =
        Response::from_string(body).with_header(make_header("Content-Type", mime::HTML));
    request.respond(response)?;
    Ok(())
}

/// Respond with the embedded client runtime.
pub fn respond_runtime_js(request: Request, body: &'static str) -> Result<()> {
    let response = Response::from_string(body)
        .with_header(make_header("Content-Type", mime::JAVASCRIPT))
        .with_header(make_header("Cache-Control", CACHE_FALLBACK));
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    let response = Response::from_string("503 Service Unavailable")
        .with_status_code(StatusCode(503))
        .with_header(make_header("Content-Type", mime::PLAIN));
    request.respond(response)?;
    Ok(())
}

/// Check the request's `If-None-Match` against the current ETag.
pub fn etag_matches(request: &Request, etag: &str) -> bool {
    request
        .headers()
        .iter()
        .filter(|h| h.field.as_str().as_str().eq_ignore_ascii_case("if-none-match"))
        .any(|h| none_match_matches(h.value.as_str(), etag))
}

/// `If-None-Match` value matching: any listed entity tag, or `*`.
fn none_match_matches(header_value: &str, etag: &str) -> bool {
    header_value.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || candidate == etag || candidate.strip_prefix("W/") == Some(etag)
    })
}

fn make_header(key: &str, value: &str) -> Header {
    Header::from_bytes(key.as_bytes(), value.as_bytes()).expect("ascii header")
}
