//! Decorative "string" threads.
//!
//! Idle threads drift slowly between an edge anchor and a near-center anchor;
//! their shape is a closed-form function of wall-clock time, so nothing but
//! the anchors and a phase/speed pair is stored. Transition threads cut from
//! one edge to the opposite edge and are fixed at creation.

use rand::Rng;

use crate::constants::*;
use crate::geometry::{CubicCurve, Edge, Point};

/// Anything that yields a drawable curve for a given frame.
pub trait Thread {
    fn curve(&self, time_ms: f64, width: f64, height: f64) -> CubicCurve;
}

/// A slowly drifting curve anchored on a canvas edge.
#[derive(Clone, Debug)]
pub struct IdleThread {
    pub start: Point,
    pub center_base: Point,
    pub phase: f64,
    pub speed: f64,
}

impl IdleThread {
    pub fn spawn(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let start = Edge::random(rng).random_point(rng, width, height, 0.0);
        let center_base = Point::new(
            width * 0.5 + (rng.gen::<f64>() - 0.5) * width * IDLE_CENTER_SPREAD,
            height * 0.5 + (rng.gen::<f64>() - 0.5) * height * IDLE_CENTER_SPREAD,
        );
        Self {
            start,
            center_base,
            phase: rng.gen::<f64>() * std::f64::consts::TAU,
            speed: IDLE_SPEED_MIN + rng.gen::<f64>() * IDLE_SPEED_SPAN,
        }
    }

    pub fn spawn_many(rng: &mut impl Rng, count: usize, width: f64, height: f64) -> Vec<Self> {
        (0..count)
            .map(|_| Self::spawn(rng, width, height))
            .collect()
    }
}

impl Thread for IdleThread {
    fn curve(&self, time_ms: f64, width: f64, height: f64) -> CubicCurve {
        let t = time_ms;
        let end = Point::new(
            self.center_base.x
                + (t * self.speed + self.phase).sin() * (width * IDLE_END_AMPLITUDE),
            self.center_base.y
                + (t * self.speed * IDLE_END_Y_FREQ + self.phase).cos()
                    * (height * IDLE_END_AMPLITUDE),
        );
        let cp1_offset = Point::new(
            (t * IDLE_CP1_FREQ + self.phase).sin(),
            (t * IDLE_CP1_FREQ + self.phase).cos(),
        ) * IDLE_CONTROL_WOBBLE;
        let cp2_offset = Point::new(
            (t * IDLE_CP2_FREQ + self.phase).cos(),
            (t * IDLE_CP2_FREQ + self.phase).sin(),
        ) * IDLE_CONTROL_WOBBLE;
        CubicCurve::along_chord(self.start, end, cp1_offset, cp2_offset)
    }
}

#[derive(Clone, Debug)]
pub struct TransitionThread {
    curve: CubicCurve,
}

impl TransitionThread {
    pub fn spawn(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let edge = Edge::random(rng);
        let start = edge.random_point(rng, width, height, TRANSITION_EDGE_MARGIN);
        let target = edge
            .opposite()
            .random_point(rng, width, height, TRANSITION_EDGE_MARGIN);
        let mut jitter = || {
            Point::new(
                (rng.gen::<f64>() - 0.5) * TRANSITION_CONTROL_JITTER,
                (rng.gen::<f64>() - 0.5) * TRANSITION_CONTROL_JITTER,
            )
        };
        let cp1_offset = jitter();
        let cp2_offset = jitter();
        Self {
            curve: CubicCurve::along_chord(start, target, cp1_offset, cp2_offset),
        }
    }
}

impl Thread for TransitionThread {
    fn curve(&self, _time_ms: f64, _width: f64, _height: f64) -> CubicCurve {
        self.curve
    }
}

/// Number of transition threads to spawn on a tick at `progress` in \[0, 1\].
///
/// Grows quickly over the first half, slowly over the second, and adds a
/// fixed burst near the end so the surface is almost fully covered.
pub fn transition_spawn_count(progress: f64) -> usize {
    let progress = progress.clamp(0.0, 1.0);
    let mut count = if progress < SPAWN_SPLIT {
        SPAWN_BASE + (progress * SPAWN_EARLY_GAIN).floor() as usize
    } else {
        SPAWN_LATE_BASE + ((progress - SPAWN_SPLIT) * SPAWN_LATE_GAIN).floor() as usize
    };
    if progress > SPAWN_BURST_THRESHOLD {
        count += SPAWN_BURST;
    }
    count
}
