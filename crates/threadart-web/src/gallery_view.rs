use std::cell::RefCell;
use std::rc::Rc;

use threadart_core::{Gallery, GalleryEntry};
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::dom;
use crate::storage::WebStore;

pub type SharedGallery = Rc<RefCell<Gallery<WebStore>>>;

const DELETE_CLASS: &str = "gallery-delete-btn";

/// Re-render the grid, newest first; the container hides when empty.
pub fn render(document: &web::Document, gallery: &SharedGallery) {
    let (Some(container), Some(grid)) = (
        document.get_element_by_id("gallery-container"),
        document.get_element_by_id("gallery-grid"),
    ) else {
        return;
    };
    let entries = match gallery.borrow_mut().entries_newest_first() {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("[gallery] read failed: {e}");
            return;
        }
    };
    if entries.is_empty() {
        dom::set_hidden(&container, true);
        return;
    }
    dom::set_hidden(&container, false);
    grid.set_inner_html("");
    for entry in &entries {
        match document.create_element("div") {
            Ok(item) => {
                item.set_class_name("gallery-item");
                item.set_inner_html(&item_html(entry));
                let _ = grid.append_child(&item);
            }
            Err(e) => log::error!("[gallery] {:?}", e),
        }
    }
}

/// Delete buttons are handled once on the grid.
pub fn wire(document: &web::Document, gallery: &SharedGallery) {
    let Some(grid) = document.get_element_by_id("gallery-grid") else {
        return;
    };
    let document = document.clone();
    let gallery = gallery.clone();
    dom::add_listener(&grid, "click", move |ev: web::Event| {
        let Some(button) = dom::target_element(&ev) else {
            return;
        };
        if !button.class_list().contains(DELETE_CLASS) {
            return;
        }
        let Some(id) = button
            .get_attribute("data-id")
            .and_then(|id| id.parse::<i64>().ok())
        else {
            log::debug!("[gallery] delete button without id");
            return;
        };
        if !dom::confirm("Permanently delete this item?") {
            return;
        }
        let deleted = gallery.borrow_mut().delete(id);
        match deleted {
            Ok(_) => render(&document, &gallery),
            Err(e) => log::error!("[gallery] delete failed: {e}"),
        }
    });
}

fn item_html(entry: &GalleryEntry) -> String {
    let source = if entry.source_data.is_empty() {
        r#"<div class="gallery-missing">No Source</div>"#.to_string()
    } else {
        format!(r#"<img src="{}" title="Original">"#, entry.source_data)
    };
    let date = js_sys::Date::new(&(entry.id as f64).into())
        .to_locale_date_string("default", &JsValue::UNDEFINED);
    format!(
        r#"<div class="gallery-pair"><div class="gallery-cell">{source}</div><div class="gallery-cell"><img src="{art}" title="String Art"></div></div><div class="gallery-meta"><span>{date}</span><button class="{DELETE_CLASS}" data-id="{id}">Delete</button></div>"#,
        art = entry.art_data,
        date = String::from(date),
        id = entry.id,
    )
}
