use dioxus::prelude::*;
use store::Banner;

use crate::icons::FaXmark;
use crate::platform::sleep_ms;
use crate::Icon;

/// Show `message` in `banner` and hide it after `timeout_ms`.
///
/// Each call takes a fresh ticket; an older timer that fires after a newer
/// message was shown leaves that message alone.
pub fn flash_banner(mut banner: Signal<Banner>, message: impl Into<String>, timeout_ms: u32) {
    let ticket = banner.write().show(message);
    spawn(async move {
        sleep_ms(timeout_ms).await;
        banner.write().expire(ticket);
    });
}

/// Dismissible error strip.
#[component]
pub fn ErrorBanner(banner: Signal<Banner>) -> Element {
    let mut banner = banner;
    let Some(message) = banner.read().message().map(str::to_owned) else {
        return rsx! {};
    };

    rsx! {
        div { class: "error-banner", role: "alert",
            span { "{message}" }
            button {
                r#type: "button",
                class: "error-banner-close",
                aria_label: "Fermer",
                onclick: move |_| banner.write().dismiss(),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
