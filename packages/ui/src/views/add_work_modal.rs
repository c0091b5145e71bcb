use api::{ImageUpload, NewWork};
use dioxus::prelude::*;
use store::validation::validate_image;
use store::{AddWorkForm, Banner, ImageFile, ImageSelection, PreviewSlot, SubmitGate};

use crate::platform::PlatformUrls;
use crate::{flash_banner, use_api, use_auth, use_gallery, use_ui_config, ErrorBanner};

use super::{ImagePreview, ModalOverlay};

const IMAGE_INPUT_ID: &str = "add-work-image";

/// "Ajout photo": title, category, image file and live preview.
///
/// "Valider" stays disabled until the form validates. A successful upload
/// refreshes the works and resets the form; a failure is shown in the modal's
/// own banner and the form keeps its content.
#[component]
pub fn AddWorkModal(on_close: EventHandler<()>, on_back: EventHandler<()>) -> Element {
    let mut gallery = use_gallery();
    let auth = use_auth();
    let client = use_api();
    let ui = use_ui_config();

    let mut form = use_signal(|| AddWorkForm {
        category: gallery.peek().default_category(),
        ..AddWorkForm::default()
    });
    let mut upload = use_signal(|| Option::<ImageUpload>::None);
    let mut preview = use_signal(|| PreviewSlot::new(PlatformUrls::default()));
    let mut selection = use_signal(ImageSelection::default);
    let banner = use_signal(Banner::default);
    let mut gate = use_signal(SubmitGate::default);

    // Categories may arrive after the modal opened.
    use_effect(move || {
        let default = gallery.read().default_category();
        if form.peek().category.is_none() && default.is_some() {
            form.write().category = default;
        }
    });

    let on_file = move |evt: FormEvent| async move {
        let generation = selection.write().next();
        // The previous bytes never outlive a new selection.
        upload.set(None);
        let Some(file) = evt.files().into_iter().next() else {
            form.write().image = None;
            preview.write().clear();
            return;
        };

        let meta = ImageFile::new(
            file.name(),
            file.content_type().unwrap_or_default(),
            file.size(),
        );
        form.write().image = Some(meta.clone());
        if let Err(e) = validate_image(Some(&meta)) {
            tracing::debug!("Rejected image {}: {e}", meta.name);
            preview.write().clear();
            return;
        }

        let read = file.read_bytes().await;
        // Another file was chosen, or the form was reset, while reading.
        if !selection.peek().is_current(generation) || form.peek().image.as_ref() != Some(&meta) {
            tracing::debug!("Dropping stale read of {}", meta.name);
            return;
        }

        match read {
            Ok(bytes) => {
                preview.write().show(&bytes, &meta.mime);
                upload.set(Some(ImageUpload {
                    file_name: meta.name,
                    mime: meta.mime,
                    bytes: bytes.to_vec(),
                }));
            }
            Err(e) => {
                tracing::error!("Failed to read {}: {e}", meta.name);
                form.write().image = None;
                upload.set(None);
                preview.write().clear();
            }
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if gate.read().is_busy() || !form.read().is_valid() {
            return;
        }
        let current = form();
        let (Some(category), Some(image)) = (current.category, upload()) else {
            return;
        };
        let work = NewWork {
            title: current.title,
            category,
            image,
        };
        let client = client.clone();
        let token = auth().token.unwrap_or_default();
        let timeout = ui.banner_timeout_ms;

        if !gate.write().try_begin() {
            return;
        }
        spawn(async move {
            match api::gallery::create_and_refresh(&client, work, &token).await {
                Ok(works) => {
                    gallery.write().replace_works(works);
                    form.write().reset();
                    selection.write().next();
                    upload.set(None);
                    preview.write().clear();
                }
                Err(e) => {
                    tracing::error!("Upload failed: {e}");
                    flash_banner(banner, e.upload_message(), timeout);
                }
            }
            gate.write().finish();
        });
    };

    let categories = gallery.read().categories.clone();
    let title = form.read().title.clone();
    let selected = form.read().category.map(|id| id.to_string()).unwrap_or_default();
    let can_submit = form.read().is_valid() && upload.read().is_some() && !gate.read().is_busy();

    rsx! {
        ModalOverlay { title: "Ajout photo", on_close: on_close, on_back: on_back,
            form { class: "add-work-form", onsubmit: on_submit,
                ImagePreview { slot: preview, input_id: IMAGE_INPUT_ID,
                    input {
                        id: IMAGE_INPUT_ID,
                        class: "visually-hidden",
                        r#type: "file",
                        accept: "image/png, image/jpeg",
                        onchange: on_file,
                    }
                }
                label { r#for: "add-work-title", "Titre" }
                input {
                    id: "add-work-title",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                label { r#for: "add-work-category", "Catégorie" }
                select {
                    id: "add-work-category",
                    value: "{selected}",
                    onchange: move |evt: FormEvent| form.write().category = evt.value().parse().ok(),
                    for category in categories {
                        option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                    }
                }
                ErrorBanner { banner: banner }
                hr { class: "modal-separator" }
                button {
                    r#type: "submit",
                    class: "modal-primary",
                    disabled: !can_submit,
                    "Valider"
                }
            }
        }
    }
}
