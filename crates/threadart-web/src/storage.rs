use threadart_core::{KeyValueStore, StorageError};
use web_sys as web;

/// `KeyValueStore` over the browser's `localStorage` or `sessionStorage`.
pub struct WebStore {
    storage: web::Storage,
}

impl WebStore {
    pub fn local() -> Result<Self, StorageError> {
        let window = web::window().ok_or_else(|| StorageError("no window".into()))?;
        Self::from_js(window.local_storage())
    }

    pub fn session() -> Result<Self, StorageError> {
        let window = web::window().ok_or_else(|| StorageError("no window".into()))?;
        Self::from_js(window.session_storage())
    }

    fn from_js(
        storage: Result<Option<web::Storage>, wasm_bindgen::JsValue>,
    ) -> Result<Self, StorageError> {
        storage
            .map_err(storage_err)?
            .map(|storage| Self { storage })
            .ok_or_else(|| StorageError("storage disabled".into()))
    }
}

impl KeyValueStore for WebStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(storage_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(storage_err)
    }
}

fn storage_err(e: wasm_bindgen::JsValue) -> StorageError {
    StorageError(format!("{:?}", e))
}
