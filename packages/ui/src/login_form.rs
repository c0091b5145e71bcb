//! Email/password login form.

use dioxus::prelude::*;
use store::{Banner, Credentials, LoginFlow, LoginPhase};

use crate::platform::{make_session_store, navigate_to};
use crate::{flash_banner, use_api, use_ui_config, ErrorBanner, GALLERY_CSS};

/// Login form; on success, navigates to `redirect_to`.
///
/// Only one submission is in flight at a time: the button is disabled until
/// the response has been handled.
#[component]
pub fn LoginForm(#[props(default = "/".to_string())] redirect_to: String) -> Element {
    let client = use_api();
    let ui = use_ui_config();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut flow = use_signal(LoginFlow::default);
    let banner = use_signal(Banner::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = Credentials::new(email(), password());
        if !flow.write().begin(&credentials) {
            // Either a request is already in flight or a field is empty.
            if let LoginPhase::Failure(message) = flow.read().phase() {
                flash_banner(banner, message.clone(), ui.banner_timeout_ms);
            }
            return;
        }

        let client = client.clone();
        let redirect_to = redirect_to.clone();
        let timeout = ui.banner_timeout_ms;
        spawn(async move {
            match api::login_redirect(&client, &make_session_store(), &credentials, &redirect_to)
                .await
            {
                Ok(href) => {
                    flow.write().succeed();
                    navigate_to(&href);
                }
                Err(e) => {
                    flow.write().fail();
                    flash_banner(banner, e.to_string(), timeout);
                }
            }
        });
    };

    let submitting = flow.read().is_submitting();

    rsx! {
        document::Stylesheet { href: GALLERY_CSS }
        form { class: "login-form", onsubmit: handle_login,
            label { r#for: "email", "E-mail" }
            input {
                id: "email",
                r#type: "email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { r#for: "password", "Mot de passe" }
            input {
                id: "password",
                r#type: "password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            ErrorBanner { banner: banner }
            button { r#type: "submit", disabled: submitting, "Se connecter" }
            a { class: "forgot-password", href: "#", "Mot de passe oublié" }
        }
    }
}
