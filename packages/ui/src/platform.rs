//! Platform-specific constructors and browser side effects.
//!
//! The session store and the preview URL factory are chosen at compile time:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`],
//!   object URLs via [`store::BrowserUrls`]
//! - **Native**: filesystem via [`store::FileStore`] under
//!   `<data_dir>/portfolio-gallery/`, no object URLs (the preview keeps its
//!   placeholder)

use std::time::Duration;

/// Object URL factory for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformUrls = store::BrowserUrls;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformUrls = store::NoObjectUrls;

/// Create the platform-appropriate session store.
pub fn make_session_store() -> store::SessionStore<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("portfolio-gallery");
        store::SessionStore::new(store::FileStore::new(base))
    }
}

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(Duration::from_millis(ms.into())).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms.into())).await;
}

/// Full-page navigation, so the target page rebuilds its state from storage.
pub fn navigate_to(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("Navigation to {href} ignored outside the browser");
}

pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("Reload ignored outside the browser");
}
