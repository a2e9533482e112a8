//! Deterministic blink timing.
//!
//! Every avatar blinks on its own schedule: the configured interval is
//! scaled by a per-seed jitter factor and offset by a per-seed phase so a
//! page full of avatars never blinks in lockstep. Both values come from the
//! secondary blink hash, keeping face/color/rotation untouched by blink
//! settings.

use super::hash::blink_hash;
use super::options::{MAX_BLINK_INTERVAL_SECONDS, MIN_BLINK_INTERVAL_SECONDS};

/// Widest fraction of the cycle the eyes may spend closing and reopening.
const MAX_CLOSE_RATIO: f64 = 0.18;

/// Resolved animation timing for one avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkTimeline {
    /// Jittered cycle length in seconds, clamped to the interval bounds.
    pub interval_seconds: f64,
    /// Phase offset in `[0, interval)`, applied as a negative delay.
    pub delay_seconds: f64,
    /// Keyframe fraction where the eyes start closing.
    pub close_start: f64,
    /// Keyframe fraction where the eyes are open again; always >= start.
    pub close_end: f64,
}

/// Compute the blink timeline for a seed.
///
/// `interval_seconds` and `duration_ms` are expected pre-clamped by
/// `RenderOptions::sanitized`.
pub fn timeline(seed: &str, interval_seconds: u32, duration_ms: u32) -> BlinkTimeline {
    let h = blink_hash(seed);

    // Jitter factor in [0.8, 1.2), re-clamped into the legal interval range.
    let jitter = f64::from((h >> 8) % 1000) / 1000.0;
    let interval = (f64::from(interval_seconds) * (0.8 + jitter * 0.4)).clamp(
        f64::from(MIN_BLINK_INTERVAL_SECONDS),
        f64::from(MAX_BLINK_INTERVAL_SECONDS),
    );

    let phase = f64::from(h % 10_000) / 10_000.0;
    let delay = phase * interval;

    let close_ratio = (f64::from(duration_ms) / (interval * 1000.0)).min(MAX_CLOSE_RATIO);
    let close_start = (0.48 - close_ratio / 2.0).max(0.35);
    // The formulas above cannot invert the window, but the ordering is a
    // rendering invariant, so it is enforced rather than assumed.
    let close_end = (close_start + close_ratio).min(0.62).max(close_start);

    BlinkTimeline {
        interval_seconds: interval,
        delay_seconds: delay,
        close_start,
        close_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_alice() {
        // blink_hash("alice") = 768561888; jitter source 194/1000.
        let t = timeline("alice", 8, 140);
        assert!((t.interval_seconds - 7.0208).abs() < 1e-9);
        assert!((t.delay_seconds - 1.32552704).abs() < 1e-9);
    }

    #[test]
    fn test_jitter_stays_in_band() {
        for seed in ["alice", "bob", "charlie", "dora", "edgar", ""] {
            let t = timeline(seed, 10, 140);
            assert!(t.interval_seconds >= 8.0 - 1e-9, "{seed}");
            assert!(t.interval_seconds < 12.0 + 1e-9, "{seed}");
        }
    }

    #[test]
    fn test_interval_clamped_to_bounds() {
        // 2s base scaled by 0.8 would fall below the floor.
        let t = timeline("alice", 2, 140);
        assert!(t.interval_seconds >= 2.0);

        // 30s base scaled by 1.2 would exceed the ceiling.
        let t = timeline("bob", 30, 140);
        assert!(t.interval_seconds <= 30.0);
    }

    #[test]
    fn test_delay_within_cycle() {
        for seed in ["alice", "bob", "charlie", ""] {
            let t = timeline(seed, 8, 140);
            assert!(t.delay_seconds >= 0.0, "{seed}");
            assert!(t.delay_seconds < t.interval_seconds, "{seed}");
        }
    }

    #[test]
    fn test_close_window_ordering() {
        // Longest blink against the shortest cycle: the close window must
        // stay well-ordered even at the ratio cap.
        let t = timeline("alice", 2, 2000);
        assert!(t.close_start >= 0.35);
        assert!(t.close_end <= 0.62);
        assert!(t.close_end >= t.close_start);

        // Shortest blink against the longest cycle.
        let t = timeline("alice", 30, 80);
        assert!(t.close_end >= t.close_start);
        assert!(t.close_start <= 0.48);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(timeline("alice", 8, 140), timeline("alice", 8, 140));
    }

    #[test]
    fn test_seeds_desynchronized() {
        let a = timeline("alice", 8, 140);
        let b = timeline("bob", 8, 140);
        assert!(
            (a.interval_seconds - b.interval_seconds).abs() > 1e-9
                || (a.delay_seconds - b.delay_seconds).abs() > 1e-9
        );
    }
}
