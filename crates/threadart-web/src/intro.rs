use threadart_core::{IntroPlan, MemoryStore};
use web_sys as web;

use crate::dom;
use crate::storage::WebStore;

/// Play the logo intro on the first page load of the session.
pub fn play(document: &web::Document) {
    let plan = match WebStore::session() {
        Ok(mut store) => IntroPlan::from_session(&mut store),
        Err(e) => {
            log::warn!("[intro] {e}");
            IntroPlan::from_session(&mut MemoryStore::new())
        }
    };
    let logo = dom::query(document, ".logo");
    let nav_links = dom::query(document, ".nav-links");
    let hero_content = dom::query(document, ".hero-content");

    match plan {
        IntroPlan::Animate {
            nav_delay_ms,
            hero_delay_ms,
        } => {
            log::info!("[intro] animating");
            if let Some(el) = &logo {
                dom::set_class(el, "logo-animate", true);
            }
            reveal_later(nav_links, nav_delay_ms);
            reveal_later(hero_content, hero_delay_ms);
        }
        IntroPlan::Static => {
            if let Some(el) = &logo {
                dom::set_class(el, "logo-static", true);
            }
            for el in [nav_links, hero_content].iter().flatten() {
                dom::set_class(el, "visible", true);
            }
        }
    }
}

fn reveal_later(el: Option<web::Element>, delay_ms: u32) {
    if let Some(el) = el {
        dom::set_timeout(delay_ms, move || dom::set_class(&el, "visible", true));
    }
}
