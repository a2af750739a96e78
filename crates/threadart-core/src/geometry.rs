//! Surface-space geometry shared by the generators and the drawing surface.

use glam::DVec2;
use rand::Rng;

use crate::constants::{CP1_T, CP2_T};

/// Real-valued 2D coordinate in surface space.
pub type Point = DVec2;

/// Cubic Bezier thread from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicCurve {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

impl CubicCurve {
    /// Curve whose control points sit at 30% / 70% of the chord, each shifted
    /// by its own offset.
    pub fn along_chord(start: Point, end: Point, cp1_offset: Point, cp2_offset: Point) -> Self {
        Self {
            start,
            cp1: start.lerp(end, CP1_T) + cp1_offset,
            cp2: start.lerp(end, CP2_T) + cp2_offset,
            end,
        }
    }
}

/// Straight line produced by the line-selection engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4) {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Right => Edge::Left,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
        }
    }

    /// Random point on this edge of a `width` x `height` surface pushed
    /// `margin` units outward.
    pub fn random_point(self, rng: &mut impl Rng, width: f64, height: f64, margin: f64) -> Point {
        match self {
            Edge::Top => Point::new(rng.gen::<f64>() * width, -margin),
            Edge::Right => Point::new(width + margin, rng.gen::<f64>() * height),
            Edge::Bottom => Point::new(rng.gen::<f64>() * width, height + margin),
            Edge::Left => Point::new(-margin, rng.gen::<f64>() * height),
        }
    }
}
