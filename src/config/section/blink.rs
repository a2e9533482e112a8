//! `[avatar.blink]` section configuration.

use crate::avatar::options::{
    MAX_BLINK_DURATION_MS, MAX_BLINK_INTERVAL_SECONDS, MIN_BLINK_DURATION_MS,
    MIN_BLINK_INTERVAL_SECONDS, clamp_i64,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkConfig {
    /// Emit the blink keyframe animation.
    pub enable: bool,

    /// Base cycle length; jittered per avatar, clamped to [2, 30].
    pub interval_seconds: i64,

    /// Eye-closed duration; clamped to [80, 2000].
    pub duration_ms: i64,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            enable: false,
            interval_seconds: 8,
            duration_ms: 140,
        }
    }
}

impl BlinkConfig {
    pub fn interval_seconds(&self) -> u32 {
        clamp_i64(
            self.interval_seconds,
            MIN_BLINK_INTERVAL_SECONDS,
            MAX_BLINK_INTERVAL_SECONDS,
        )
    }

    pub fn duration_ms(&self) -> u32 {
        clamp_i64(self.duration_ms, MIN_BLINK_DURATION_MS, MAX_BLINK_DURATION_MS)
    }
}
