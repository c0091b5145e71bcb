//! Login page view.

use dioxus::prelude::*;
use ui::{navigate_to, use_auth, LoginForm};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let home = Route::Home {}.to_string();

    // Already logged in: straight back to the gallery.
    if auth().is_active() {
        navigate_to(&home);
    }

    rsx! {
        header { class: "site-header",
            h1 {
                Link { to: Route::Home {}, "Sophie Bluel " }
                span { "Architecte d'intérieur" }
            }
            nav {
                ul {
                    li { Link { to: Route::Home {}, "projets" } }
                    li { strong { "login" } }
                }
            }
        }
        main {
            section { class: "login",
                h2 { "Log In" }
                LoginForm { redirect_to: home }
            }
        }
    }
}
