//! Local Storage Slot
//!
//! `PersistenceSlot` over `window.localStorage`.

use list_core::{ListError, ListResult, PersistenceSlot};
use wasm_bindgen::JsValue;

pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

fn js_err(e: JsValue) -> ListError {
    ListError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

fn storage() -> ListResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| ListError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| ListError::Storage("localStorage unavailable".to_string()))
}

impl PersistenceSlot for LocalStorageSlot {
    fn load(&self) -> ListResult<Option<String>> {
        storage()?.get_item(&self.key).map_err(js_err)
    }

    fn store(&mut self, value: &str) -> ListResult<()> {
        storage()?.set_item(&self.key, value).map_err(js_err)
    }

    fn clear(&mut self) -> ListResult<()> {
        storage()?.remove_item(&self.key).map_err(js_err)
    }
}
