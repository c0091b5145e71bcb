//! # Gallery state — works, categories, and what the page shows
//!
//! [`GalleryState`] is the single owner of the two collections fetched from
//! the backend. Both are replaced wholesale after every mutation and never
//! patched in place, so a render always sees a consistent snapshot.
//!
//! Rendering is split in two: this module decides *what* is shown
//! ([`GalleryState::cards`], [`GalleryState::filter_entries`]) as plain data,
//! and the UI crate turns that data into markup. Both functions are pure in the
//! current state and the selected filter, so they can be called as often as
//! the UI likes.

use crate::models::{Category, Work};

/// Synthetic category id meaning "every work".
pub const ALL_CATEGORY_ID: u32 = 0;

/// Label of the synthetic "all" filter.
pub const ALL_CATEGORY_NAME: &str = "Tous";

/// Marker appended to truncated captions.
pub const ELLIPSIS: &str = "…";

/// Works and categories as last fetched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    pub works: Vec<Work>,
    pub categories: Vec<Category>,
}

/// One card of the main gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryCard {
    pub id: u32,
    pub image_url: String,
    /// Full title, used as the image's alternative text.
    pub alt: String,
    /// Title cut to the caption budget.
    pub caption: String,
    pub category_name: String,
}

/// One toggle of the filter bar.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterEntry {
    pub id: u32,
    pub name: String,
    pub active: bool,
}

impl GalleryState {
    pub fn new(works: Vec<Work>, categories: Vec<Category>) -> Self {
        Self { works, categories }
    }

    /// Swap in a freshly fetched work collection.
    pub fn replace_works(&mut self, works: Vec<Work>) {
        self.works = works;
    }

    pub fn contains_work(&self, id: u32) -> bool {
        self.works.iter().any(|w| w.id == id)
    }

    /// Works in the given category, or all of them for [`ALL_CATEGORY_ID`].
    pub fn filtered(&self, category_id: u32) -> Vec<&Work> {
        self.works
            .iter()
            .filter(|w| category_id == ALL_CATEGORY_ID || w.category_id == category_id)
            .collect()
    }

    /// Cards to render for the given filter, in API order.
    pub fn cards(&self, category_id: u32, caption_max_chars: usize) -> Vec<GalleryCard> {
        self.filtered(category_id)
            .into_iter()
            .map(|w| GalleryCard {
                id: w.id,
                image_url: w.image_url.clone(),
                alt: w.title.clone(),
                caption: truncate_caption(&w.title, caption_max_chars),
                category_name: w.category.name.clone(),
            })
            .collect()
    }

    /// Filter toggles: "Tous" first, then every category; exactly one active.
    ///
    /// An unknown `active_id` falls back to "Tous".
    pub fn filter_entries(&self, active_id: u32) -> Vec<FilterEntry> {
        let active_id = if self.categories.iter().any(|c| c.id == active_id) {
            active_id
        } else {
            ALL_CATEGORY_ID
        };
        std::iter::once(Category::new(ALL_CATEGORY_ID, ALL_CATEGORY_NAME))
            .chain(self.categories.iter().cloned())
            .map(|c| FilterEntry {
                active: c.id == active_id,
                id: c.id,
                name: c.name,
            })
            .collect()
    }

    /// Category preselected in the add-work form.
    pub fn default_category(&self) -> Option<u32> {
        self.categories.first().map(|c| c.id)
    }
}

/// Keep at most `max_chars` characters, appending [`ELLIPSIS`] when cut.
pub fn truncate_caption(title: &str, max_chars: usize) -> String {
    match title.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &title[..cut]),
        None => title.to_string(),
    }
}
