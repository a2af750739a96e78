//! Page chrome driven by core signals.

use threadart_core::{GenerationStatus, Phase, UiSignal, UiSink};
use web_sys as web;

use crate::dom;

pub const BTN_START: &str = "btn-start-gen";
pub const BTN_SAVE: &str = "btn-save-gallery";

pub struct DomSink {
    document: web::Document,
}

impl DomSink {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn phase_changed(&self, phase: Phase) {
        match phase {
            Phase::IdleDisplay => {}
            Phase::Transitioning => {
                for selector in [".hero-content", ".navbar"] {
                    if let Some(el) = dom::query(&self.document, selector) {
                        dom::set_style(&el, "opacity", "0");
                    }
                }
            }
            Phase::GeneratorDisplay => {
                if let Some(el) = self.document.get_element_by_id("sequence-generator") {
                    dom::set_hidden(&el, false);
                    dom::set_class(&el, "active", true);
                }
                if let Some(el) = dom::query(&self.document, ".navbar") {
                    dom::set_style(&el, "display", "none");
                }
                if let Some(el) = self.document.get_element_by_id("shop") {
                    dom::set_style(&el, "display", "none");
                }
            }
        }
    }

    fn status(&self, status: &GenerationStatus) {
        if let Some(el) = self.document.get_element_by_id("status-text") {
            dom::set_text(&el, &status.to_string());
        }
        match status {
            GenerationStatus::Ready => {
                set_workspace_header(&self.document, "Generator Ready", "Click start to begin.");
                dom::set_disabled(&self.document, BTN_START, false);
            }
            GenerationStatus::Generating => dom::set_disabled(&self.document, BTN_START, true),
            GenerationStatus::Complete => {
                dom::set_disabled(&self.document, BTN_START, false);
                dom::set_disabled(&self.document, BTN_SAVE, false);
            }
            GenerationStatus::Stopped => dom::set_disabled(&self.document, BTN_START, false),
            GenerationStatus::Error(msg) => log::warn!("[generate] {msg}"),
        }
    }
}

impl UiSink for DomSink {
    fn emit(&mut self, signal: UiSignal) {
        match signal {
            UiSignal::PhaseChanged(phase) => self.phase_changed(phase),
            UiSignal::Progress(percent) => {
                if let Some(el) = self.document.get_element_by_id("progress-bar") {
                    dom::set_style(&el, "width", &format!("{percent}%"));
                }
            }
            UiSignal::Status(status) => self.status(&status),
            UiSignal::GalleryFull { capacity } => {
                dom::alert(&format!(
                    "Gallery is full (Max {capacity}). Please delete an old item below to save this new one."
                ));
                if let Some(el) = self.document.get_element_by_id("gallery-container") {
                    dom::scroll_into_view_smooth(&el);
                }
            }
            UiSignal::Saved(_) => dom::alert("Saved to Gallery!"),
        }
    }
}

pub fn set_workspace_header(document: &web::Document, title: &str, subtitle: &str) {
    if let Some(el) = dom::query(document, "#generator-workspace h2") {
        dom::set_text(&el, title);
    }
    if let Some(el) = dom::query(document, "#generator-workspace .workspace-sub") {
        dom::set_text(&el, subtitle);
    }
}
