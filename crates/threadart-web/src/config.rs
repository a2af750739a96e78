use threadart_core::AppConfig;
use web_sys as web;

use crate::dom;

/// `?debug=1` in the page URL.
pub fn debug_requested() -> bool {
    web::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| {
            search
                .trim_start_matches('?')
                .split('&')
                .any(|pair| pair == "debug=1")
        })
        .unwrap_or(false)
}

/// Parameters from the canvas' `data-config` JSON, defaults otherwise.
pub fn load(canvas: &web::HtmlCanvasElement) -> AppConfig {
    let Some(text) = canvas.get_attribute("data-config") else {
        return AppConfig::default();
    };
    match AppConfig::from_json(&text) {
        Ok(config) => {
            log::debug!("[config] {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("[config] ignoring invalid data-config: {e}");
            AppConfig::default()
        }
    }
}

/// Target line count picked in the workspace, or `fallback`.
pub fn selected_line_count(document: &web::Document, fallback: u32) -> u32 {
    dom::by_id::<web::HtmlSelectElement>(document, "line-count-select")
        .and_then(|select| select.value().trim().parse::<u32>().ok())
        .filter(|count| *count > 0)
        .unwrap_or(fallback)
}
