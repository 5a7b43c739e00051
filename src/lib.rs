//! # reservation-chat
//!
//! Leptos + WASM chat widget for the reservation support page.
//!
//! The page is rendered by the support server; this crate mounts a single
//! `ChatWidget` into it. The widget keeps the transcript, posts each user
//! message to `/api/chat` and appends whatever reply comes back.
//!
//! `client` holds the message flow behind explicit handles so it can be
//! driven without a browser. `components` is the Leptos view on top of it.

pub mod client;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: mount the widget into the configured root element.
///
/// Expects the page to provide the root element and the customer-name element
/// before the WASM module loads. Missing elements are logged and the mount is
/// skipped.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::components::chat_widget::ChatWidget;
    use crate::config::WidgetConfig;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("chat widget: no document available");
        return;
    };

    let defaults = WidgetConfig::default();
    let Some(root) = document
        .get_element_by_id(&defaults.root_id)
        .and_then(|el| el.dyn_ref::<web_sys::HtmlElement>().cloned())
    else {
        log::error!("chat widget: root element #{} not found", defaults.root_id);
        return;
    };

    let config = defaults.with_endpoint_override(root.get_attribute("data-endpoint"));
    let Some(customer_name) = document
        .get_element_by_id(&config.customer_name_id)
        .and_then(|el| el.text_content())
        .map(|name| name.trim().to_owned())
    else {
        log::error!("chat widget: customer name element #{} not found", config.customer_name_id);
        return;
    };

    log::debug!("chat widget: mounting with endpoint {}", config.endpoint);
    let endpoint = config.endpoint;
    leptos::mount::mount_to(root, move || view! { <ChatWidget customer_name=customer_name endpoint=endpoint /> })
        .forget();
}
