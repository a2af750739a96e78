//! Drawing-surface abstraction.
//!
//! The scene and the generation loop only ever talk to a [`Surface`]; the web
//! front-end implements it over a 2D canvas context and tests use
//! [`RecordingSurface`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::{CubicCurve, Segment};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

pub trait Surface {
    /// Width and height in surface units.
    fn size(&self) -> (f64, f64);

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    /// Flood the whole surface with `color`.
    fn fill(&mut self, color: Rgba);

    fn stroke_curve(&mut self, curve: &CubicCurve, style: StrokeStyle);

    /// Stroke all `segments` as a single path.
    fn stroke_path(&mut self, segments: &[Segment], style: StrokeStyle);

    /// Stroke one line on its own, so overlapping lines compound their alpha.
    fn stroke_line(&mut self, segment: &Segment, style: StrokeStyle) {
        self.stroke_path(std::slice::from_ref(segment), style);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Fill(Rgba),
    Curve(CubicCurve, StrokeStyle),
    Path(Vec<Segment>, StrokeStyle),
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Clones share one log, the same way clones of a canvas context share one
/// canvas.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    pub fn take_ops(&self) -> Vec<DrawOp> {
        std::mem::take(&mut *self.ops.borrow_mut())
    }

    /// Number of individual lines stroked (each path counts its segments).
    pub fn line_count(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .map(|op| match op {
                DrawOp::Path(segments, _) => segments.len(),
                _ => 0,
            })
            .sum()
    }

    pub fn curve_count(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, DrawOp::Curve(..)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn fill(&mut self, color: Rgba) {
        self.ops.borrow_mut().push(DrawOp::Fill(color));
    }

    fn stroke_curve(&mut self, curve: &CubicCurve, style: StrokeStyle) {
        self.ops.borrow_mut().push(DrawOp::Curve(*curve, style));
    }

    fn stroke_path(&mut self, segments: &[Segment], style: StrokeStyle) {
        self.ops
            .borrow_mut()
            .push(DrawOp::Path(segments.to_vec(), style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_formats_as_css() {
        assert_eq!(Rgba::BLACK.with_alpha(0.2).to_string(), "rgba(0, 0, 0, 0.2)");
        assert_eq!(Rgba::WHITE.to_string(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn recording_clones_share_the_log() {
        let surface = RecordingSurface::new(10.0, 10.0);
        let mut other = surface.clone();
        other.fill(Rgba::BLACK);
        other.stroke_line(
            &Segment::new(glam::DVec2::ZERO, glam::DVec2::ONE),
            StrokeStyle::new(Rgba::BLACK, 1.0),
        );
        assert_eq!(surface.ops().len(), 2);
        assert_eq!(surface.line_count(), 1);
    }
}
