//! Review request dialog.

use dioxus::prelude::*;
use hauldesk_core::{Customer, DeliveryMethod, ReviewPlatform, ReviewRequest};

use crate::{copy_to_clipboard, sleep_ms, use_jobs_state};

const CLOSE_DELAY_MS: u32 = 1_500;

/// Props for ReviewModal component.
#[derive(Props, Clone, PartialEq)]
pub struct ReviewModalProps {
    pub customer: Customer,
    pub on_close: EventHandler<()>,
}

/// Compose a review request and copy it to the clipboard.
#[component]
pub fn ReviewModal(props: ReviewModalProps) -> Element {
    let state = use_jobs_state();
    let mut platform = use_signal(|| None::<ReviewPlatform>);
    let mut method = use_signal(|| None::<DeliveryMethod>);
    let mut review_link = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut sending = use_signal(|| false);

    let customer = props.customer.clone();
    let on_close = props.on_close;

    // Preview appears once platform and method are chosen.
    let request = match (platform(), method()) {
        (Some(platform), Some(method)) => Some(ReviewRequest {
            platform,
            review_link: review_link(),
            method,
        }),
        _ => None,
    };
    let preview = request.as_ref().map(|r| r.message(&customer));

    let submit_customer = customer.clone();
    let submit = move |_| {
        let Some(request) = request.clone() else {
            error.set(Some("Choose a platform and a delivery method.".to_string()));
            return;
        };
        let prepared = match request.prepare(&submit_customer) {
            Ok(p) => p,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        spawn(async move {
            sending.set(true);
            error.set(None);

            match copy_to_clipboard(&prepared.message).await {
                Ok(()) => {
                    state.success(format!(
                        "Review request copied to clipboard! Send it via {}",
                        prepared.destination
                    ));
                    sleep_ms(CLOSE_DELAY_MS).await;
                    on_close.call(());
                }
                Err(e) => error.set(Some(format!("Failed to copy to clipboard: {}", e))),
            }

            sending.set(false);
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div { class: "modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { "Send Review Request" }
                    button {
                        class: "btn-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { "Customer" }
                    input {
                        r#type: "text",
                        readonly: true,
                        value: "{customer.name} - {customer.phone}",
                    }
                }

                div { class: "form-group",
                    label { "Review Platform *" }
                    select {
                        onchange: move |e| platform.set(ReviewPlatform::parse(&e.value())),

                        option { value: "", "Select platform" }
                        for p in ReviewPlatform::ALL {
                            option { key: "{p.as_str()}", value: "{p.as_str()}", "{p.name()}" }
                        }
                    }
                }

                div { class: "form-group",
                    label { "Review Link *" }
                    input {
                        r#type: "url",
                        placeholder: "https://g.page/r/...",
                        value: "{review_link}",
                        oninput: move |e| review_link.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Send Via *" }
                    select {
                        onchange: move |e| method.set(DeliveryMethod::parse(&e.value())),

                        option { value: "", "Select method" }
                        option { value: DeliveryMethod::Email.as_str(), "Email" }
                        option { value: DeliveryMethod::Sms.as_str(), "SMS" }
                    }
                }

                if let Some(message) = preview {
                    div { class: "form-group",
                        label { "Message Preview" }
                        textarea {
                            class: "message-preview",
                            rows: 8,
                            readonly: true,
                            value: "{message}",
                        }
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: sending(),
                        onclick: submit,
                        if sending() { "Copying..." } else { "Copy Message" }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
