//! Upload, crop confirmation and the generate/stop/reset/save controls.

use std::cell::RefCell;
use std::rc::Rc;

use threadart_core::{drive, GenerationLoop, GeneratorParams, Rgba, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::canvas::CanvasSurface;
use crate::crop_view::CropView;
use crate::dom;
use crate::engine::JsLineEngine;
use crate::frame::RafScheduler;
use crate::gallery_view::{self, SharedGallery};
use crate::overlay::{self, DomSink, BTN_SAVE, BTN_START};

type Sink = Rc<RefCell<DomSink>>;

pub struct Workspace {
    document: web::Document,
    art: CanvasSurface,
    source_cache: CanvasSurface,
    crop: Rc<CropView>,
    generator: Rc<RefCell<GenerationLoop<JsLineEngine>>>,
    gallery: Option<SharedGallery>,
    sink: Sink,
}

impl Workspace {
    /// Wire the workspace if the page has one.
    pub fn mount(
        document: &web::Document,
        params: GeneratorParams,
        gallery: Option<SharedGallery>,
        sink: Sink,
    ) -> anyhow::Result<Option<Rc<Self>>> {
        let (Some(trigger), Some(input), Some(art_canvas)) = (
            document.get_element_by_id("upload-trigger"),
            dom::by_id::<web::HtmlInputElement>(document, "image-upload"),
            dom::by_id::<web::HtmlCanvasElement>(document, "art-canvas"),
        ) else {
            log::debug!("[ui] no generator workspace on this page");
            return Ok(None);
        };
        let crop_canvas = dom::by_id::<web::HtmlCanvasElement>(document, "crop-canvas")
            .ok_or_else(|| anyhow::anyhow!("missing #crop-canvas"))?;

        let output = params.output_size.round().max(1.0) as u32;
        let art = CanvasSurface::from_canvas(&art_canvas)?;
        art.set_size(output, output);
        let workspace = Rc::new(Self {
            document: document.clone(),
            art,
            source_cache: CanvasSurface::offscreen(document, output)?,
            crop: CropView::new(document, &crop_canvas)?,
            generator: Rc::new(RefCell::new(GenerationLoop::new(params))),
            gallery,
            sink,
        });
        workspace.wire(&trigger, &input);
        dom::set_disabled(document, BTN_SAVE, true);
        Ok(Some(workspace))
    }

    fn wire(self: &Rc<Self>, trigger: &web::Element, input: &web::HtmlInputElement) {
        {
            let input = input.clone();
            dom::add_listener(trigger, "click", move |_: web::Event| input.click());
        }
        {
            let ws = self.clone();
            let input_change = input.clone();
            dom::add_listener(input, "change", move |_: web::Event| {
                if let Some(file) = input_change.files().and_then(|files| files.get(0)) {
                    ws.load_file(&file);
                }
            });
        }
        {
            let trigger_over = trigger.clone();
            dom::add_listener(trigger, "dragover", move |ev: web::DragEvent| {
                ev.prevent_default();
                dom::set_style(&trigger_over, "border-color", "#fff");
            });
        }
        {
            let trigger_leave = trigger.clone();
            dom::add_listener(trigger, "dragleave", move |ev: web::DragEvent| {
                ev.prevent_default();
                dom::set_style(&trigger_leave, "border-color", "#444");
            });
        }
        {
            let ws = self.clone();
            let trigger_drop = trigger.clone();
            dom::add_listener(trigger, "drop", move |ev: web::DragEvent| {
                ev.prevent_default();
                dom::set_style(&trigger_drop, "border-color", "#444");
                let file = ev
                    .data_transfer()
                    .and_then(|dt| dt.files())
                    .and_then(|files| files.get(0));
                if let Some(file) = file {
                    ws.load_file(&file);
                }
            });
        }

        let ws = self.clone();
        dom::add_click_listener(&self.document, "crop-confirm-btn", move || ws.confirm_crop());
        let ws = self.clone();
        dom::add_click_listener(&self.document, BTN_START, move || ws.start());
        let ws = self.clone();
        dom::add_click_listener(&self.document, "btn-stop-gen", move || ws.stop());
        let ws = self.clone();
        dom::add_click_listener(&self.document, "btn-reset-gen", move || ws.reset());
        let ws = self.clone();
        dom::add_click_listener(&self.document, BTN_SAVE, move || ws.save());
    }

    /// Read `file` as a data URL, decode it, then open the crop preview.
    fn load_file(self: &Rc<Self>, file: &web::File) {
        let reader = match web::FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                log::error!("[upload] FileReader: {:?}", e);
                return;
            }
        };
        let ws = self.clone();
        let reader_done = reader.clone();
        let onload = wasm_bindgen::closure::Closure::once_into_js(move |_: web::ProgressEvent| {
            let Some(url) = reader_done.result().ok().and_then(|r| r.as_string()) else {
                log::warn!("[upload] file could not be read");
                return;
            };
            spawn_local(async move {
                match decode_image(&url).await {
                    Ok(image) => ws.crop.open(image),
                    Err(e) => log::warn!("[upload] {e}"),
                }
            });
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        if let Err(e) = reader.read_as_data_url(file) {
            log::error!("[upload] read failed: {:?}", e);
        }
    }

    fn confirm_crop(&self) {
        let output = self.art.size().0;
        let Some((image, transform)) = self.crop.confirm(output) else {
            return;
        };
        if let Some(el) = self.document.get_element_by_id("processing-view") {
            dom::set_hidden(&el, false);
        }

        let mut art = self.art.clone();
        art.fill(Rgba::WHITE);
        art.draw_image(&image, transform);
        if let Some(display) = dom::by_id::<web::HtmlImageElement>(&self.document, "source-image-display") {
            match art.to_data_url() {
                Ok(url) => display.set_src(&url),
                Err(e) => log::warn!("[crop] source preview: {e}"),
            }
        }
        self.source_cache.copy_from(&art);

        let mut sink = self.sink.clone();
        let prepared = self.generator.borrow_mut().prepare(
            self.source_cache.canvas().clone(),
            &mut art,
            &mut sink,
        );
        if let Err(e) = prepared {
            log::error!("[generate] {e}");
        }
    }

    fn start(&self) {
        let fallback = self.generator.borrow().params().line_count;
        let target = crate::config::selected_line_count(&self.document, fallback);
        let started = self.generator.borrow_mut().start(
            target,
            &mut self.art.clone(),
            &mut self.sink.clone(),
        );
        match started {
            Ok(()) => {
                drive(&self.generator, &RafScheduler, self.art.clone(), self.sink.clone());
            }
            Err(e) => log::debug!("[generate] start ignored: {e}"),
        }
    }

    fn stop(&self) {
        if !self.generator.borrow_mut().stop(&mut self.sink.clone()) {
            log::debug!("[generate] stop ignored: not running");
        }
    }

    fn reset(&self) {
        self.generator
            .borrow_mut()
            .reset(&mut self.art.clone(), &mut self.sink.clone());
        self.crop.cancel();
        if let Some(el) = self.document.get_element_by_id("processing-view") {
            dom::set_hidden(&el, true);
        }
        if let Some(display) = dom::by_id::<web::HtmlImageElement>(&self.document, "source-image-display") {
            display.set_src("");
        }
        if let Some(input) = dom::by_id::<web::HtmlInputElement>(&self.document, "image-upload") {
            input.set_value("");
        }
        overlay::set_workspace_header(
            &self.document,
            "Upload Your Photo",
            "Process your image into string art.",
        );
        dom::set_disabled(&self.document, BTN_START, false);
        dom::set_disabled(&self.document, BTN_SAVE, true);
    }

    fn save(&self) {
        let Some(gallery) = &self.gallery else {
            log::warn!("[gallery] storage unavailable; not saving");
            return;
        };
        let art = match self.art.to_data_url() {
            Ok(url) => url,
            Err(e) => {
                log::error!("[gallery] capture failed: {e}");
                return;
            }
        };
        let source = self.source_cache.to_data_url().unwrap_or_default();
        let id = js_sys::Date::now() as i64;
        let saved = gallery
            .borrow_mut()
            .save_notify(id, art, source, &mut self.sink.clone());
        match saved {
            Ok(Some(_)) => gallery_view::render(&self.document, gallery),
            Ok(None) => {}
            Err(e) => log::error!("[gallery] save failed: {e}"),
        }
    }
}

async fn decode_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let image = web::HtmlImageElement::new().map_err(dom::js_err)?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| anyhow::anyhow!(format!("image decode failed: {:?}", e)))?;
    Ok(image)
}
