use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaXmark};
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
///
/// Clicking the backdrop or the close control triggers `on_close`. When
/// `on_back` is set, a back arrow is shown in the top-left corner.
#[component]
pub fn ModalOverlay(
    title: String,
    on_close: EventHandler<()>,
    on_back: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{title}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div { class: "modal-controls",
                    if let Some(on_back) = on_back {
                        button {
                            r#type: "button",
                            class: "modal-back",
                            aria_label: "Retour",
                            onclick: move |_| on_back.call(()),
                            Icon { icon: FaArrowLeft, width: 18, height: 18 }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        aria_label: "Fermer",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    }
                }
                h3 { class: "modal-title", "{title}" }
                {children}
            }
        }
    }
}
