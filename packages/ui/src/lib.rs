//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_session_store, navigate_to, reload_page, PlatformUrls};

pub mod views;

pub const GALLERY_CSS: Asset = asset!("/assets/styling/gallery.css");

mod config;
pub use config::{use_api, use_ui_config, ConfigProvider};

mod session;
pub use session::{use_auth, AuthProvider, AuthState, SessionLink};

mod gallery_state;
pub use gallery_state::use_gallery;

mod banner;
pub use banner::{flash_banner, ErrorBanner};

mod gallery;
pub use gallery::{FilterBar, Gallery};

mod edit_mode;
pub use edit_mode::{EditButton, EditModeBar};

mod login_form;
pub use login_form::LoginForm;
