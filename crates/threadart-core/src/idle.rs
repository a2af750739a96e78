//! Idle detection for the hero canvas.
//!
//! After a few seconds without input the radial pattern fades in; any
//! activity fades it back out.

use crate::constants::{IDLE_BLEND_ALPHA, IDLE_TARGET_OPACITY, IDLE_THRESHOLD_MS};

/// Turns input recency into a smoothed blend factor in \[0, IDLE_TARGET_OPACITY\].
#[derive(Clone, Debug)]
pub struct IdleTracker {
    last_activity_ms: f64,
    opacity: f64,
}

impl IdleTracker {
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_activity_ms: now_ms,
            opacity: 0.0,
        }
    }

    /// Pointer move, scroll, click or touch-start.
    pub fn note_activity(&mut self, now_ms: f64) {
        self.last_activity_ms = now_ms;
    }

    pub fn is_idle(&self, now_ms: f64) -> bool {
        now_ms - self.last_activity_ms > IDLE_THRESHOLD_MS
    }

    pub fn target(&self, now_ms: f64) -> f64 {
        if self.is_idle(now_ms) {
            IDLE_TARGET_OPACITY
        } else {
            0.0
        }
    }

    /// Move the blend one step toward its target and return it.
    pub fn update(&mut self, now_ms: f64) -> f64 {
        let target = self.target(now_ms);
        self.opacity += (target - self.opacity) * IDLE_BLEND_ALPHA;
        self.opacity
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}
