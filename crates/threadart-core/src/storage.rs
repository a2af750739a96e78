//! String key-value persistence and the saved-artwork gallery on top of it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    GALLERY_CAPACITY, GALLERY_KEY, GALLERY_MIN_ART_LEN, INTRO_HERO_DELAY_MS, INTRO_NAV_DELAY_MS,
    INTRO_PLAYED_KEY,
};
use crate::error::{GalleryError, StorageError};
use crate::signals::{UiSignal, UiSink};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    /// Save timestamp in epoch milliseconds.
    pub id: i64,
    /// Rendered artwork as a data URL.
    pub art_data: String,
    /// Composited source image as a data URL; empty for very old entries.
    pub source_data: String,
}

/// On-disk shape, including the field name used before `artData`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: i64,
    art_data: Option<String>,
    data: Option<String>,
    source_data: Option<String>,
}

impl StoredEntry {
    fn migrate(self) -> Option<GalleryEntry> {
        let art_data = self.art_data.or(self.data)?;
        if art_data.len() <= GALLERY_MIN_ART_LEN {
            return None;
        }
        Some(GalleryEntry {
            id: self.id,
            art_data,
            source_data: self.source_data.unwrap_or_default(),
        })
    }
}

pub struct Gallery<S: KeyValueStore> {
    store: S,
    capacity: usize,
}

impl<S: KeyValueStore> Gallery<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            capacity: GALLERY_CAPACITY,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored entries, oldest first, after migrating legacy fields and
    /// dropping broken captures. Lists left over-capacity by older versions
    /// are cut to the newest entries and written back.
    pub fn entries(&mut self) -> Result<Vec<GalleryEntry>, GalleryError> {
        let Some(raw) = self.store.get(GALLERY_KEY)? else {
            return Ok(Vec::new());
        };
        let stored: Vec<StoredEntry> = serde_json::from_str(&raw)?;
        let mut entries: Vec<GalleryEntry> =
            stored.into_iter().filter_map(StoredEntry::migrate).collect();
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
            self.write(&entries)?;
            log::info!("[gallery] trimmed {excess} entries over capacity");
        }
        Ok(entries)
    }

    pub fn entries_newest_first(&mut self) -> Result<Vec<GalleryEntry>, GalleryError> {
        let mut entries = self.entries()?;
        entries.reverse();
        Ok(entries)
    }

    /// Append a new entry. A full gallery is an error and nothing is written.
    pub fn save(
        &mut self,
        id: i64,
        art_data: String,
        source_data: String,
    ) -> Result<GalleryEntry, GalleryError> {
        let mut entries = self.entries()?;
        if entries.len() >= self.capacity {
            return Err(GalleryError::Full {
                capacity: self.capacity,
            });
        }
        let entry = GalleryEntry {
            id,
            art_data,
            source_data,
        };
        entries.push(entry.clone());
        self.write(&entries)?;
        log::info!("[gallery] saved {id} ({}/{})", entries.len(), self.capacity);
        Ok(entry)
    }

    /// Like [`Gallery::save`], reporting the outcome as a UI signal. A full
    /// gallery yields `Ok(None)`.
    pub fn save_notify(
        &mut self,
        id: i64,
        art_data: String,
        source_data: String,
        sink: &mut impl UiSink,
    ) -> Result<Option<GalleryEntry>, GalleryError> {
        match self.save(id, art_data, source_data) {
            Ok(entry) => {
                sink.emit(UiSignal::Saved(entry.id));
                Ok(Some(entry))
            }
            Err(GalleryError::Full { capacity }) => {
                log::info!("[gallery] save rejected: full");
                sink.emit(UiSignal::GalleryFull { capacity });
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: i64) -> Result<bool, GalleryError> {
        let mut entries = self.entries()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write(&entries)?;
        log::info!("[gallery] deleted {id}");
        Ok(true)
    }

    fn write(&mut self, entries: &[GalleryEntry]) -> Result<(), GalleryError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(GALLERY_KEY, &json)?;
        Ok(())
    }
}

/// How the logo intro should play on this page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPlan {
    Animate {
        nav_delay_ms: u32,
        hero_delay_ms: u32,
    },
    Static,
}

impl IntroPlan {
    /// Animate once per browsing session; the flag is written on first play.
    pub fn from_session(store: &mut impl KeyValueStore) -> Self {
        match store.get(INTRO_PLAYED_KEY) {
            Ok(Some(_)) => IntroPlan::Static,
            Ok(None) | Err(_) => {
                if let Err(e) = store.set(INTRO_PLAYED_KEY, "true") {
                    log::warn!("[intro] could not record intro flag: {e}");
                }
                IntroPlan::Animate {
                    nav_delay_ms: INTRO_NAV_DELAY_MS,
                    hero_delay_ms: INTRO_HERO_DELAY_MS,
                }
            }
        }
    }
}
