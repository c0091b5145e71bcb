//! Session context and hooks for the UI.

use dioxus::prelude::*;

use crate::platform::{make_session_store, reload_page};

/// What the page knows about the persisted session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user_id: Option<String>,
    pub token: Option<String>,
}

impl AuthState {
    /// Read both keys from the platform store.
    pub fn load() -> Self {
        let sessions = make_session_store();
        Self {
            user_id: sessions.user_id(),
            token: sessions.token(),
        }
    }

    /// Edit mode is unlocked as soon as either key is present.
    pub fn is_active(&self) -> bool {
        self.user_id.is_some() || self.token.is_some()
    }
}

/// Get the current session state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that reads the session once per page load.
///
/// Login and logout both leave the page (navigation or reload), so the state
/// is never refreshed in place.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::load);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// The "login" navigation entry, rewritten to "logout" while a session is
/// active.
#[component]
pub fn SessionLink(
    #[props(default = "/login".to_string())] login_href: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    if !auth().is_active() {
        return rsx! {
            a { class: "{class}", href: "{login_href}", "login" }
        };
    }

    let onclick = move |evt: Event<MouseData>| {
        evt.prevent_default();
        api::logout(&make_session_store());
        reload_page();
    };

    rsx! {
        a { class: "{class}", href: "#", onclick: onclick, "logout" }
    }
}
