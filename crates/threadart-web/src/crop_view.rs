//! Square crop preview: drag to pan, wheel to zoom.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DAffine2;
use threadart_core::{preview_size_for_viewport, Cropper, Rgba, Surface};
use web_sys as web;

use crate::canvas::CanvasSurface;
use crate::dom;

pub struct CropView {
    document: web::Document,
    surface: RefCell<CanvasSurface>,
    image: RefCell<Option<web::HtmlImageElement>>,
    cropper: RefCell<Option<Cropper>>,
}

impl CropView {
    pub fn new(document: &web::Document, canvas: &web::HtmlCanvasElement) -> anyhow::Result<Rc<Self>> {
        let view = Rc::new(Self {
            document: document.clone(),
            surface: RefCell::new(CanvasSurface::from_canvas(canvas)?),
            image: RefCell::new(None),
            cropper: RefCell::new(None),
        });
        view.wire(canvas);
        Ok(view)
    }

    /// Show a freshly decoded image, cover-fitted and centered.
    pub fn open(&self, image: web::HtmlImageElement) {
        let size = preview_size_for_viewport(dom::inner_width());
        let Some(cropper) = Cropper::new(
            image.natural_width() as f64,
            image.natural_height() as f64,
            size,
        ) else {
            log::debug!("[crop] ignoring image without pixels");
            return;
        };
        self.surface.borrow().set_size(size as u32, size as u32);
        *self.image.borrow_mut() = Some(image);
        *self.cropper.borrow_mut() = Some(cropper);
        self.show(true);
        self.redraw();
        log::info!("[crop] preview {size}x{size}");
    }

    /// Discard the loaded image and bring back the upload affordance.
    pub fn cancel(&self) {
        self.image.borrow_mut().take();
        self.cropper.borrow_mut().take();
        self.show(false);
    }

    /// Hand over the image and its output transform, closing the preview.
    pub fn confirm(&self, output_size: f64) -> Option<(web::HtmlImageElement, DAffine2)> {
        let image = self.image.borrow_mut().take()?;
        let cropper = self.cropper.borrow_mut().take()?;
        if let Some(el) = self.document.get_element_by_id("cropper-container") {
            dom::set_hidden(&el, true);
        }
        log::info!("[crop] confirmed {:?}", cropper.state());
        Some((image, cropper.output_transform(output_size)))
    }

    fn show(&self, cropping: bool) {
        if let Some(el) = self.document.get_element_by_id("upload-trigger") {
            dom::set_hidden(&el, cropping);
        }
        if let Some(el) = self.document.get_element_by_id("cropper-container") {
            dom::set_hidden(&el, !cropping);
        }
    }

    fn redraw(&self) {
        let image = self.image.borrow();
        let cropper = self.cropper.borrow();
        let (Some(image), Some(cropper)) = (image.as_ref(), cropper.as_ref()) else {
            return;
        };
        let mut surface = self.surface.borrow_mut();
        surface.fill(Rgba::BLACK);
        surface.draw_image(image, cropper.preview_transform());
    }

    fn with_cropper(&self, f: impl FnOnce(&mut Cropper) -> bool) {
        let changed = match self.cropper.borrow_mut().as_mut() {
            Some(cropper) => f(cropper),
            None => false,
        };
        if changed {
            self.redraw();
        }
    }

    fn wire(self: &Rc<Self>, canvas: &web::HtmlCanvasElement) {
        let Some(window) = web::window() else {
            return;
        };
        {
            let view = self.clone();
            dom::add_listener(canvas, "mousedown", move |ev: web::MouseEvent| {
                view.with_cropper(|c| {
                    c.begin_drag(ev.client_x() as f64, ev.client_y() as f64);
                    false
                });
            });
        }
        {
            let view = self.clone();
            dom::add_listener(&window, "mousemove", move |ev: web::MouseEvent| {
                view.with_cropper(|c| c.drag_to(ev.client_x() as f64, ev.client_y() as f64));
            });
        }
        {
            let view = self.clone();
            dom::add_listener(&window, "mouseup", move |_: web::MouseEvent| {
                view.with_cropper(|c| {
                    c.end_drag();
                    false
                });
            });
        }
        {
            let view = self.clone();
            dom::add_listener(canvas, "touchstart", move |ev: web::TouchEvent| {
                if let Some(touch) = single_touch(&ev) {
                    view.with_cropper(|c| {
                        c.begin_drag(touch.client_x() as f64, touch.client_y() as f64);
                        false
                    });
                }
            });
        }
        {
            let view = self.clone();
            dom::add_listener(canvas, "touchmove", move |ev: web::TouchEvent| {
                if let Some(touch) = single_touch(&ev) {
                    ev.prevent_default();
                    view.with_cropper(|c| {
                        c.drag_to(touch.client_x() as f64, touch.client_y() as f64)
                    });
                }
            });
        }
        {
            let view = self.clone();
            dom::add_listener(canvas, "touchend", move |_: web::TouchEvent| {
                view.with_cropper(|c| {
                    c.end_drag();
                    false
                });
            });
        }
        {
            let view = self.clone();
            dom::add_listener(canvas, "wheel", move |ev: web::WheelEvent| {
                ev.prevent_default();
                view.with_cropper(|c| {
                    c.zoom(ev.delta_y());
                    true
                });
            });
        }
        {
            let view = self.clone();
            dom::add_click_listener(&self.document, "crop-cancel-btn", move || view.cancel());
        }
    }
}

fn single_touch(ev: &web::TouchEvent) -> Option<web::Touch> {
    let touches = ev.touches();
    if touches.length() == 1 {
        touches.get(0)
    } else {
        None
    }
}
