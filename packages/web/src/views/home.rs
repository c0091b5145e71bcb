use dioxus::prelude::*;
use ui::views::GalleryView;

#[component]
pub fn Home() -> Element {
    rsx! {
        GalleryView {}
    }
}
