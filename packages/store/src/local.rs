//! # Browser storage — `localStorage` and object URLs
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through `web-sys`, so the session
//! survives reloads and is shared between the login and gallery pages.
//!
//! [`BrowserUrls`] implements [`ObjectUrls`] with `URL.createObjectURL` over a
//! typed `Blob`, for the add-work preview.
//!
//! ## Error handling
//!
//! Storage may be unavailable (private browsing, disabled cookies). Every
//! method swallows the failure: reads return `None`, writes do nothing. The
//! page then behaves as if nobody is logged in.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Storage, Url};

use crate::preview::ObjectUrls;
use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Object URLs backed by `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserUrls;

impl ObjectUrls for BrowserUrls {
    fn create(&self, bytes: &[u8], mime: &str) -> Option<String> {
        let parts = Array::new();
        parts.push(&JsValue::from(Uint8Array::from(bytes)));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
        Url::create_object_url_with_blob(&blob).ok()
    }

    fn revoke(&self, url: &str) {
        let _ = Url::revoke_object_url(url);
    }
}
