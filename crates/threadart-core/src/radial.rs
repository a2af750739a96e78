//! Rotating, breathing chord pattern around the surface center.

use crate::constants::*;
use crate::geometry::{Point, Segment};
use crate::surface::{Rgba, StrokeStyle, Surface};

/// Pointer position normalized to the surface center, roughly \[-0.5, 0.5\]
/// on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub fn from_surface(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (x - width / 2.0) / width,
            y: (y - height / 2.0) / height,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RadialPattern {
    rotation: f64,
    breathing: f64,
}

impl RadialPattern {
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn breathing(&self) -> f64 {
        self.breathing
    }

    fn ease_rotation(&mut self, pointer: PointerOffset) {
        let target = pointer.x * RADIAL_ROTATION_GAIN;
        self.rotation += (target - self.rotation) * RADIAL_ROTATION_ALPHA;
    }

    /// Advance rotation and breathing without drawing.
    pub fn step(&mut self, pointer: PointerOffset) {
        self.ease_rotation(pointer);
        self.breathing += RADIAL_BREATH_STEP;
    }

    /// Circle samples for the current state.
    pub fn points(
        &self,
        time_ms: f64,
        width: f64,
        height: f64,
        pointer: PointerOffset,
    ) -> Vec<Point> {
        let center = Point::new(width / 2.0, height / 2.0);
        let radius =
            width.min(height) * RADIAL_RADIUS_SCALE + self.breathing.sin() * RADIAL_BREATH_AMPLITUDE;
        let offset = self.rotation + time_ms * RADIAL_DRIFT_PER_MS;
        (0..RADIAL_POINTS)
            .map(|i| {
                let angle = (i as f64 / RADIAL_POINTS as f64) * std::f64::consts::TAU + offset;
                let distort = (angle * RADIAL_DISTORT_LOBES).sin() * (pointer.y * RADIAL_DISTORT_GAIN);
                center + Point::new(angle.cos(), angle.sin()) * (radius + distort)
            })
            .collect()
    }

    /// Ease, draw one star per chord offset, then breathe.
    pub fn render(
        &mut self,
        surface: &mut impl Surface,
        time_ms: f64,
        pointer: PointerOffset,
        color: Rgba,
    ) {
        let (width, height) = surface.size();
        self.ease_rotation(pointer);
        let points = self.points(time_ms, width, height, pointer);
        let style = StrokeStyle::new(color.with_alpha(RADIAL_ALPHA), 1.0);
        let mut chords = Vec::with_capacity(RADIAL_POINTS);
        for offset in RADIAL_CHORD_OFFSETS {
            chords.clear();
            chords.extend(
                (0..RADIAL_POINTS)
                    .map(|i| Segment::new(points[i], points[(i + offset) % RADIAL_POINTS])),
            );
            surface.stroke_path(&chords, style);
        }
        self.breathing += RADIAL_BREATH_STEP;
    }
}
