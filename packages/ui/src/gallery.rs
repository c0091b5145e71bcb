use dioxus::prelude::*;

use crate::{use_gallery, use_ui_config};

/// The main gallery: one figure per work matching `category`.
///
/// `category` is a category id, `0` meaning every work.
#[component]
pub fn Gallery(category: u32) -> Element {
    let gallery = use_gallery();
    let ui = use_ui_config();
    let cards = gallery.read().cards(category, ui.caption_max_chars);

    rsx! {
        div { class: "gallery",
            for card in cards {
                figure { key: "{card.id}",
                    img {
                        src: "{card.image_url}",
                        alt: "{card.alt}",
                        "data-category": "{card.category_name}",
                    }
                    figcaption { "{card.caption}" }
                }
            }
        }
    }
}

/// One toggle per category plus "Tous"; exactly one is active.
#[component]
pub fn FilterBar(active: u32, on_select: EventHandler<u32>) -> Element {
    let gallery = use_gallery();
    let entries = gallery.read().filter_entries(active);

    rsx! {
        div { class: "filters",
            for entry in entries {
                button {
                    key: "{entry.id}",
                    r#type: "button",
                    class: if entry.active { "filter active" } else { "filter" },
                    onclick: move |_| on_select.call(entry.id),
                    "{entry.name}"
                }
            }
        }
    }
}
