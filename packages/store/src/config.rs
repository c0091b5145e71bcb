//! # Application configuration — `gallery.toml`
//!
//! Defines the TOML configuration that tells the front end where the backend
//! lives and how a few UI constants are tuned. The web app embeds the file at
//! compile time (filename: [`GalleryConfig::filename`] = `"gallery.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5678/api"
//! login_path = "/users/login"
//! works_path = "/works"
//! categories_path = "/categories"
//!
//! [ui]
//! caption_max_chars = 36
//! banner_timeout_ms = 5000
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `gallery.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_works_path")]
    pub works_path: String,
    #[serde(default = "default_categories_path")]
    pub categories_path: String,
}

fn default_base_url() -> String {
    "http://localhost:5678/api".to_string()
}

fn default_login_path() -> String {
    "/users/login".to_string()
}

fn default_works_path() -> String {
    "/works".to_string()
}

fn default_categories_path() -> String {
    "/categories".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            works_path: default_works_path(),
            categories_path: default_categories_path(),
        }
    }
}

impl ApiConfig {
    pub fn login_url(&self) -> String {
        self.join(&self.login_path)
    }

    pub fn works_url(&self) -> String {
        self.join(&self.works_path)
    }

    pub fn work_url(&self, id: u32) -> String {
        format!("{}/{id}", self.works_url())
    }

    pub fn categories_url(&self) -> String {
        self.join(&self.categories_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// UI tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Captions longer than this are cut and suffixed with an ellipsis.
    #[serde(default = "default_caption_max_chars")]
    pub caption_max_chars: usize,
    /// How long an error banner stays visible.
    #[serde(default = "default_banner_timeout_ms")]
    pub banner_timeout_ms: u32,
}

fn default_caption_max_chars() -> usize {
    36
}

fn default_banner_timeout_ms() -> u32 {
    5000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            caption_max_chars: default_caption_max_chars(),
            banner_timeout_ms: default_banner_timeout_ms(),
        }
    }
}

impl GalleryConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gallery.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `source`, logging and falling back to defaults when it is malformed.
    pub fn from_toml_or_default(source: &str) -> Self {
        match Self::from_toml(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Invalid {}: {e}", Self::filename());
                Self::default()
            }
        }
    }
}
