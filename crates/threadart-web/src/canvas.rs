//! `Surface` over a 2D canvas context.

use glam::DAffine2;
use threadart_core::{CubicCurve, Rgba, Segment, StrokeStyle, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::js_err;

#[derive(Clone)]
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    /// A detached canvas of `size`x`size`.
    pub fn offscreen(document: &web::Document, size: u32) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas.set_width(size);
        canvas.set_height(size);
        Self::from_canvas(&canvas)
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Draw `image` with `transform` mapping image pixels to surface pixels.
    pub fn draw_image(&self, image: &web::HtmlImageElement, transform: DAffine2) {
        let m = transform.matrix2;
        let t = transform.translation;
        self.ctx.save();
        let _ = self
            .ctx
            .set_transform(m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y, t.x, t.y);
        let _ = self.ctx.draw_image_with_html_image_element(image, 0.0, 0.0);
        self.ctx.restore();
    }

    /// Replace this surface's pixels with a copy of `other`.
    pub fn copy_from(&self, other: &CanvasSurface) {
        self.set_size(other.canvas.width(), other.canvas.height());
        let _ = self
            .ctx
            .draw_image_with_html_canvas_element(&other.canvas, 0.0, 0.0);
    }

    pub fn to_data_url(&self) -> anyhow::Result<String> {
        self.canvas.to_data_url().map_err(js_err)
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill(&mut self, color: Rgba) {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn stroke_curve(&mut self, curve: &CubicCurve, style: StrokeStyle) {
        self.ctx.begin_path();
        self.ctx.move_to(curve.start.x, curve.start.y);
        self.ctx.bezier_curve_to(
            curve.cp1.x,
            curve.cp1.y,
            curve.cp2.x,
            curve.cp2.y,
            curve.end.x,
            curve.end.y,
        );
        self.apply(style);
        self.ctx.stroke();
    }

    fn stroke_path(&mut self, segments: &[Segment], style: StrokeStyle) {
        self.ctx.begin_path();
        for segment in segments {
            self.ctx.move_to(segment.p1.x, segment.p1.y);
            self.ctx.line_to(segment.p2.x, segment.p2.y);
        }
        self.apply(style);
        self.ctx.stroke();
    }
}

impl CanvasSurface {
    fn apply(&self, style: StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.color.to_string());
        self.ctx.set_line_width(style.width);
    }
}
