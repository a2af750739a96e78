use std::cell::RefCell;
use std::rc::Rc;

use threadart_core::{SceneState, UiSink};
use web_sys as web;

use crate::dom;

const NAVBAR_SCROLLED_AT: f64 = 50.0;

/// Navigation bar, shop link and workspace reveal.
pub fn wire_page_chrome(window: &web::Window, document: &web::Document) {
    {
        let document_click = document.clone();
        dom::add_click_listener(document, "buy-now-btn", move || {
            if let Some(shop) = document_click.get_element_by_id("shop") {
                dom::scroll_into_view_smooth(&shop);
            }
        });
    }

    if let Some(navbar) = dom::query(document, ".navbar") {
        let window_scroll = window.clone();
        dom::add_listener(window, "scroll", move |_: web::Event| {
            let y = window_scroll.scroll_y().unwrap_or(0.0);
            dom::set_class(&navbar, "scrolled", y > NAVBAR_SCROLLED_AT);
        });
    }

    {
        let document_click = document.clone();
        dom::add_click_listener(document, "generate-now-btn", move || {
            if let Some(workspace) = document_click.get_element_by_id("generator-workspace") {
                dom::set_hidden(&workspace, false);
                log::info!("[ui] workspace revealed");
                dom::set_timeout(10, move || dom::scroll_into_view_smooth(&workspace));
            }
        });
    }
}

/// Input, resize and the transition trigger for the hero scene.
pub fn wire_scene<K>(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<SceneState>>,
    sink: K,
) where
    K: UiSink + Clone + 'static,
{
    {
        let scene = scene.clone();
        dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
            scene
                .borrow_mut()
                .pointer_moved(ev.client_x() as f64, ev.client_y() as f64, instant::now());
        });
    }

    for event in ["scroll", "click", "touchstart"] {
        let scene = scene.clone();
        dom::add_listener(window, event, move |_: web::Event| {
            scene.borrow_mut().note_activity(instant::now());
        });
    }

    {
        let scene = scene.clone();
        let canvas = canvas.clone();
        dom::add_listener(window, "resize", move |_: web::Event| {
            let (width, height) = dom::fit_canvas_to_window(&canvas);
            scene.borrow_mut().resize(width, height);
            log::debug!("[frame] resized to {}x{}", width, height);
        });
    }

    {
        let scene = scene.clone();
        dom::add_click_listener(document, "sequence-generator-btn", move || {
            let mut sink = sink.clone();
            if !scene.borrow_mut().start_transition(instant::now(), &mut sink) {
                log::debug!("[ui] transition already started");
            }
        });
    }
}
