use dioxus::prelude::*;

use store::GalleryConfig;
use ui::{AuthProvider, ConfigProvider};
use views::{Home, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; `GALLERY_API_URL` overrides the backend address.
const CONFIG_TOML: &str = include_str!("../gallery.toml");

fn load_config() -> GalleryConfig {
    let config = GalleryConfig::from_toml_or_default(CONFIG_TOML);
    match option_env!("GALLERY_API_URL") {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ConfigProvider { config: config,
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = GalleryConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }
}
