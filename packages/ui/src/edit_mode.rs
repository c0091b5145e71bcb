use dioxus::prelude::*;

use crate::icons::FaPenToSquare;
use crate::Icon;

/// Black strip shown above the header while editing.
#[component]
pub fn EditModeBar() -> Element {
    rsx! {
        div { class: "edit-mode-bar",
            Icon { icon: FaPenToSquare, width: 14, height: 14 }
            span { "Mode édition" }
        }
    }
}

/// The "modifier" control next to the gallery heading.
#[component]
pub fn EditButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "edit-button",
            onclick: move |_| on_click.call(()),
            Icon { icon: FaPenToSquare, width: 14, height: 14 }
            span { "modifier" }
        }
    }
}
