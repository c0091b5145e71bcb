//! # Image preview lifecycle
//!
//! The add-work form previews the chosen image through a transient object URL.
//! Object URLs pin the file's bytes in browser memory until revoked, so
//! [`PreviewSlot`] treats each one as a scoped resource:
//!
//! - [`PreviewSlot::show`] releases whatever URL the slot still holds before
//!   acquiring a new one (a file re-selected before the previous preview
//!   finished loading).
//! - [`PreviewSlot::loaded`] releases the URL once the `<img>` has decoded it.
//! - [`PreviewSlot::clear`] and `Drop` release anything still held.
//!
//! URL creation and revocation go through [`ObjectUrls`] so the lifecycle is
//! testable without a browser.

/// Creates and revokes object URLs.
pub trait ObjectUrls {
    /// Create a URL serving `bytes` as `mime`. `None` when the platform cannot.
    fn create(&self, bytes: &[u8], mime: &str) -> Option<String>;
    /// Revoke a URL. Revoking an unknown or already revoked URL is a no-op.
    fn revoke(&self, url: &str);
}

/// Platforms without object URLs: previews always fall back to the placeholder.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObjectUrls;

impl ObjectUrls for NoObjectUrls {
    fn create(&self, _bytes: &[u8], _mime: &str) -> Option<String> {
        None
    }

    fn revoke(&self, _url: &str) {}
}

/// The preview region of the add-work form.
pub struct PreviewSlot<U: ObjectUrls> {
    urls: U,
    /// URL currently displayed; stays valid for the `<img>` after revocation.
    src: Option<String>,
    /// URL acquired but not yet released.
    held: Option<String>,
}

impl<U: ObjectUrls> PreviewSlot<U> {
    pub fn new(urls: U) -> Self {
        Self {
            urls,
            src: None,
            held: None,
        }
    }

    /// Display `bytes` as the preview, releasing any previous URL first.
    ///
    /// Returns the new source, or `None` when no URL could be created (the
    /// placeholder is shown instead).
    pub fn show(&mut self, bytes: &[u8], mime: &str) -> Option<&str> {
        self.release();
        self.src = self.urls.create(bytes, mime);
        self.held = self.src.clone();
        self.src.as_deref()
    }

    /// The preview image finished loading `url`.
    pub fn loaded(&mut self, url: &str) {
        if self.held.as_deref() == Some(url) {
            self.release();
        }
    }

    /// Revert to the placeholder.
    pub fn clear(&mut self) {
        self.release();
        self.src = None;
    }

    /// Source to render; `None` means the placeholder.
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Whether a URL is still waiting to be released.
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    fn release(&mut self) {
        if let Some(url) = self.held.take() {
            self.urls.revoke(&url);
        }
    }
}

impl<U: ObjectUrls> Drop for PreviewSlot<U> {
    fn drop(&mut self) {
        self.release();
    }
}
