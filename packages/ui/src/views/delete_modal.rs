use dioxus::prelude::*;

use crate::icons::FaTrashCan;
use crate::{use_api, use_auth, use_gallery, Icon};

use super::ModalOverlay;

/// "Galerie photo": every work as a thumbnail with a trash button.
///
/// A deletion always re-fetches the works, whether or not the backend
/// accepted it; failures only reach the log.
#[component]
pub fn DeleteWorksModal(on_close: EventHandler<()>, on_add: EventHandler<()>) -> Element {
    let mut gallery = use_gallery();
    let auth = use_auth();
    let client = use_api();

    let delete = use_callback(move |id: u32| {
        let client = client.clone();
        let token = auth().token.unwrap_or_default();
        spawn(async move {
            let works = api::gallery::delete_and_refresh(&client, id, &token).await;
            gallery.write().replace_works(works);
        });
    });

    let works = gallery.read().works.clone();

    rsx! {
        ModalOverlay { title: "Galerie photo", on_close: on_close,
            div { class: "modal-gallery",
                for work in works {
                    figure { key: "{work.id}", class: "modal-thumb",
                        img { src: "{work.image_url}", alt: "{work.title}" }
                        button {
                            r#type: "button",
                            class: "trash-button",
                            aria_label: "Supprimer {work.title}",
                            onclick: move |_| delete.call(work.id),
                            Icon { icon: FaTrashCan, width: 11, height: 11 }
                        }
                    }
                }
            }
            hr { class: "modal-separator" }
            button {
                r#type: "button",
                class: "modal-primary",
                onclick: move |_| on_add.call(()),
                "Ajouter une photo"
            }
        }
    }
}
