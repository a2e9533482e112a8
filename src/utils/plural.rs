//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 avatars)
/// - `plural_s(1)` -> `""` (1 avatar)
/// - `plural_s(5)` -> `"s"` (5 avatars)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
