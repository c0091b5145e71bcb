//! Configuration and backend client shared through context.

use api::ApiClient;
use dioxus::prelude::*;
use store::config::UiConfig;
use store::GalleryConfig;

/// Provide the parsed [`GalleryConfig`] and an [`ApiClient`] built from it.
#[component]
pub fn ConfigProvider(config: GalleryConfig, children: Element) -> Element {
    let ui = config.ui.clone();
    let api_config = config.api.clone();
    use_context_provider(move || ui);
    use_context_provider(move || ApiClient::new(api_config));

    rsx! {
        {children}
    }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>()
}
