use dioxus::prelude::*;
use store::GalleryState;

/// Consume the `Signal<GalleryState>` provided by the gallery page.
///
/// The main gallery, the filter bar and both modals read the same signal, so
/// replacing the works after a mutation re-renders all of them.
pub fn use_gallery() -> Signal<GalleryState> {
    use_context::<Signal<GalleryState>>()
}
