#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use threadart_core::{AppConfig, Gallery};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod config;
mod crop_view;
mod dom;
mod engine;
mod events;
mod frame;
mod gallery_view;
mod intro;
mod overlay;
mod storage;
mod workspace;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if config::debug_requested() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("threadart-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    events::wire_page_chrome(&window, &document);
    intro::play(&document);

    let sink = Rc::new(RefCell::new(overlay::DomSink::new(document.clone())));

    // The workspace keeps working without the hero animation.
    let config = match dom::by_id::<web::HtmlCanvasElement>(&document, "thread-canvas") {
        Some(hero_canvas) => {
            let config = config::load(&hero_canvas);
            match frame::start_hero_loop(&hero_canvas, config.scene.clone(), sink.clone()) {
                Ok(scene) => {
                    events::wire_scene(&window, &document, &hero_canvas, &scene, sink.clone())
                }
                Err(e) => log::error!("[frame] hero animation disabled: {:?}", e),
            }
            config
        }
        None => {
            log::error!("[frame] hero animation disabled: missing #thread-canvas");
            AppConfig::default()
        }
    };

    let gallery = match storage::WebStore::local() {
        Ok(store) => Some(Rc::new(RefCell::new(Gallery::new(store)))),
        Err(e) => {
            log::warn!("[gallery] disabled: {e}");
            None
        }
    };
    if let Some(gallery) = &gallery {
        gallery_view::wire(&document, gallery);
        gallery_view::render(&document, gallery);
    }
    workspace::Workspace::mount(&document, config.generator, gallery, sink)?;
    Ok(())
}
