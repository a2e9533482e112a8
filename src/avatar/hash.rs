//! Order-dependent 32-bit seed hashing.
//!
//! The hash is a compatibility contract: the same algorithm runs in the
//! browser runtime, so every implementation must reproduce the classic
//! `h = (h << 5) - h + codepoint` accumulator with signed 32-bit overflow.
//! Changing it would silently reassign every existing avatar.

/// Hash a seed string into a non-negative 32-bit magnitude.
///
/// Iterates Unicode code points and accumulates in wrapping signed 32-bit
/// arithmetic, then takes the absolute value of the final signed result.
/// Total over any input; the empty string hashes to 0.
#[inline]
pub fn seed_hash(seed: &str) -> u32 {
    let mut h: i32 = 0;
    for cp in seed.chars() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(cp as i32);
    }
    h.unsigned_abs()
}

/// Secondary hash driving blink jitter and phase.
///
/// Kept separate from `seed_hash` so that toggling blink settings never
/// changes the face, color, or rotation derived from the primary hash.
#[inline]
pub fn blink_hash(seed: &str) -> u32 {
    seed_hash(&format!("{seed}|blink"))
}
