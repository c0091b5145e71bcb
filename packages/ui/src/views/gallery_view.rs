//! The portfolio page: header, gallery with filters, and the edit workflow.

use dioxus::prelude::*;
use store::{GalleryState, ALL_CATEGORY_ID};

use crate::{
    use_api, use_auth, EditButton, EditModeBar, FilterBar, Gallery, SessionLink, GALLERY_CSS,
};

use super::{AddWorkModal, DeleteWorksModal};

/// Which modal is open, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ModalStep {
    Closed,
    Delete,
    Add,
}

#[component]
pub fn GalleryView() -> Element {
    let mut gallery: Signal<GalleryState> =
        use_context_provider(|| Signal::new(GalleryState::default()));
    let mut filter = use_signal(|| ALL_CATEGORY_ID);
    let mut modal = use_signal(|| ModalStep::Closed);
    let auth = use_auth();
    let client = use_api();

    // Initial load; renders an empty gallery until it completes or when it fails.
    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            gallery.set(api::gallery::load_gallery(&client).await);
        }
    });

    let editing = auth().is_active();

    rsx! {
        document::Stylesheet { href: GALLERY_CSS }
        if editing {
            EditModeBar {}
        }
        header { class: "site-header",
            h1 {
                "Sophie Bluel "
                span { "Architecte d'intérieur" }
            }
            nav {
                ul {
                    li { a { href: "#portfolio", "projets" } }
                    li { a { href: "#contact", "contact" } }
                    li { SessionLink {} }
                }
            }
        }
        main {
            section { id: "portfolio",
                div { class: "portfolio-heading",
                    h2 { "Mes Projets" }
                    if editing {
                        EditButton { on_click: move |_| modal.set(ModalStep::Delete) }
                    }
                }
                FilterBar { active: filter(), on_select: move |id: u32| filter.set(id) }
                Gallery { category: filter() }
            }
        }
        {match modal() {
            ModalStep::Closed => rsx! {},
            ModalStep::Delete => rsx! {
                DeleteWorksModal {
                    on_close: move |_| modal.set(ModalStep::Closed),
                    on_add: move |_| modal.set(ModalStep::Add),
                }
            },
            ModalStep::Add => rsx! {
                AddWorkModal {
                    on_close: move |_| modal.set(ModalStep::Closed),
                    on_back: move |_| modal.set(ModalStep::Delete),
                }
            },
        }}
    }
}
