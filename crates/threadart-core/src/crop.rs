//! Crop/pan/zoom of a source image inside a square preview.
//!
//! The transform is translate + uniform scale. It is applied to the image in
//! preview space and, on confirmation, re-scaled to the output size.

use glam::{DAffine2, DVec2};

use crate::constants::{CROP_MIN_SCALE, PREVIEW_GUTTER, PREVIEW_MAX_SIZE, WHEEL_ZOOM_PER_UNIT};
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropState {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub min_scale: f64,
}

#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    pointer: Point,
    origin: Point,
}

#[derive(Clone, Debug)]
pub struct Cropper {
    preview_size: f64,
    state: CropState,
    drag: Option<DragAnchor>,
}

/// Square preview edge for a viewport `viewport_width` units wide.
pub fn preview_size_for_viewport(viewport_width: f64) -> f64 {
    (viewport_width - PREVIEW_GUTTER).min(PREVIEW_MAX_SIZE).max(1.0)
}

impl Cropper {
    /// Cover-fit the image in the preview and center it. `None` for an image
    /// without pixels.
    pub fn new(image_width: f64, image_height: f64, preview_size: f64) -> Option<Self> {
        if image_width <= 0.0 || image_height <= 0.0 || preview_size <= 0.0 {
            return None;
        }
        let scale = (preview_size / image_width).max(preview_size / image_height);
        let state = CropState {
            x: (preview_size - image_width * scale) / 2.0,
            y: (preview_size - image_height * scale) / 2.0,
            scale,
            min_scale: CROP_MIN_SCALE,
        };
        Some(Self {
            preview_size,
            state,
            drag: None,
        })
    }

    pub fn state(&self) -> CropState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag = Some(DragAnchor {
            pointer: Point::new(x, y),
            origin: Point::new(self.state.x, self.state.y),
        });
    }

    /// Pan by the pointer travel since `begin_drag`. Returns false when no
    /// drag is in progress.
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        let pos = anchor.origin + (Point::new(x, y) - anchor.pointer);
        self.state.x = pos.x;
        self.state.y = pos.y;
        true
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Wheel zoom: positive `delta_y` zooms out. Never below `min_scale`; no
    /// upper bound.
    pub fn zoom(&mut self, delta_y: f64) {
        let scale = self.state.scale - delta_y * WHEEL_ZOOM_PER_UNIT;
        self.state.scale = scale.max(self.state.min_scale);
    }

    /// Image space -> preview space.
    pub fn preview_transform(&self) -> DAffine2 {
        DAffine2::from_translation(DVec2::new(self.state.x, self.state.y))
            * DAffine2::from_scale(DVec2::splat(self.state.scale))
    }

    /// Image space -> output space for a square output of `output_size`.
    pub fn output_transform(&self, output_size: f64) -> DAffine2 {
        let upscale = output_size / self.preview_size;
        DAffine2::from_scale(DVec2::splat(upscale)) * self.preview_transform()
    }
}
