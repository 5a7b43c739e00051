//! Reservation support chat: transcript, text input, and send button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the transcript and input signals and wires them into a `ChatClient`.
//! Every entry is rendered through the hardened markdown renderer before it
//! is inserted with `inner_html`.

use std::future::Future;

use leptos::prelude::*;

use crate::client::ChatClient;
use crate::net::api::HttpTransport;
use crate::state::chat::ChatState;
use crate::util::markdown;

/// Chat widget greeting `customer_name` and posting to `endpoint`.
#[component]
pub fn ChatWidget(customer_name: String, endpoint: String) -> impl IntoView {
    let transcript = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let client = ChatClient::new(transcript, input, HttpTransport::new(endpoint));
    client.initialize(&customer_name);
    let client = StoredValue::new(client);

    // Keep the newest entry in view.
    Effect::new(move || {
        transcript.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if let Some(pending) = client.with_value(|c| c.submit(&text)) {
            spawn_transmit(pending);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-widget">
            <div id="chat-box" class="chat-box" node_ref=messages_ref>
                {move || {
                    transcript
                        .with(|state| {
                            state
                                .messages
                                .iter()
                                .map(|msg| {
                                    let class = format!("message {}", msg.origin.css_class());
                                    let rendered = markdown::render(&msg.text);
                                    view! { <div class=class inner_html=rendered></div> }
                                })
                                .collect::<Vec<_>>()
                        })
                }}

                {move || {
                    transcript
                        .with(ChatState::is_waiting)
                        .then(|| view! { <div class="message thinking-message">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-input-row">
                <input
                    id="user-input"
                    class="chat-input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id="send-button" class="btn chat-send" type="button" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Run a transmit on the page's event loop without waiting for it.
fn spawn_transmit(pending: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    wasm_bindgen_futures::spawn_local(pending);
    #[cfg(not(feature = "csr"))]
    leptos::task::spawn_local(pending);
}
