//! Notifications the core sends to whatever owns the page chrome.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::scene::Phase;

#[derive(Clone, Debug, PartialEq)]
pub enum GenerationStatus {
    Ready,
    Generating,
    Complete,
    Stopped,
    Error(String),
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStatus::Ready => f.write_str("Image Processed. Ready."),
            GenerationStatus::Generating => f.write_str("Generating..."),
            GenerationStatus::Complete => f.write_str("Complete!"),
            GenerationStatus::Stopped => f.write_str("Stopped."),
            GenerationStatus::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiSignal {
    PhaseChanged(Phase),
    /// Percent in \[0, 100\].
    Progress(f64),
    Status(GenerationStatus),
    GalleryFull { capacity: usize },
    Saved(i64),
}

pub trait UiSink {
    fn emit(&mut self, signal: UiSignal);
}

impl UiSink for Vec<UiSignal> {
    fn emit(&mut self, signal: UiSignal) {
        self.push(signal);
    }
}

impl<T: UiSink> UiSink for Rc<RefCell<T>> {
    fn emit(&mut self, signal: UiSignal) {
        self.borrow_mut().emit(signal);
    }
}
