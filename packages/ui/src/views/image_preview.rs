use dioxus::prelude::*;
use store::PreviewSlot;

use crate::icons::FaImage;
use crate::platform::PlatformUrls;
use crate::Icon;

/// Preview region of the add form.
///
/// Shows the chosen image while the slot holds a source, otherwise the 76×76
/// placeholder with the upload hints. The object URL is released as soon as
/// the browser has decoded the image.
#[component]
pub fn ImagePreview(
    slot: Signal<PreviewSlot<PlatformUrls>>,
    /// Id of the file input the placeholder hint opens.
    input_id: String,
    children: Element,
) -> Element {
    let mut slot = slot;
    let src = slot.read().src().map(str::to_owned);

    match src {
        Some(url) => {
            let shown = url.clone();
            rsx! {
                div { class: "preview filled",
                    img {
                        class: "preview-image",
                        src: "{shown}",
                        alt: "Aperçu",
                        onload: move |_| slot.write().loaded(&url),
                    }
                    {children}
                }
            }
        }
        None => rsx! {
            div { class: "preview",
                Icon { icon: FaImage, width: 76, height: 76, class: "preview-placeholder" }
                {children}
                label { r#for: "{input_id}", class: "preview-hint", "+ Ajouter photo" }
                p { class: "preview-caption", "jpg, png : 4mo max" }
            }
        },
    }
}
