//! Marketing post generator form.

use dioxus::prelude::*;
use hauldesk_core::{GeneratedPosts, PostRequest, ServiceType};

use crate::use_jobs_state;

/// Props for PostForm component.
#[derive(Props, Clone, PartialEq)]
pub struct PostFormProps {
    /// Called with freshly generated posts.
    pub on_generated: EventHandler<GeneratedPosts>,
}

#[component]
pub fn PostForm(props: PostFormProps) -> Element {
    let state = use_jobs_state();
    let mut request = use_signal(PostRequest::default);
    let current = request.read().clone();
    let on_generated = props.on_generated;

    let generate = move |_| match request.read().generate() {
        Ok(posts) => {
            on_generated.call(posts);
            state.success("Posts generated!");
        }
        Err(e) => state.error(e.to_string()),
    };

    let selected_service = current.service_type.map(|s| s.value()).unwrap_or_default();

    rsx! {
        div { class: "card post-form",
            h2 { "Create Social Media Posts" }
            p { class: "card-description",
                "Turn a finished job into ready-to-share posts for every platform."
            }

            div { class: "form-grid",
                div { class: "form-group",
                    label { "Company Name *" }
                    input {
                        r#type: "text",
                        value: "{current.company_name}",
                        oninput: move |e| request.write().company_name = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Service Type *" }
                    select {
                        value: "{selected_service}",
                        onchange: move |e| request.write().service_type = ServiceType::parse(&e.value()),

                        option { value: "", "Select service" }
                        for service in ServiceType::ALL {
                            option {
                                key: "{service.value()}",
                                value: "{service.value()}",
                                "{service.label()}"
                            }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Service Area *" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. Austin, TX",
                        value: "{current.area}",
                        oninput: move |e| request.write().area = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Phone *" }
                    input {
                        r#type: "tel",
                        value: "{current.phone}",
                        oninput: move |e| request.write().phone = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: "{current.email}",
                        oninput: move |e| request.write().email = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Website" }
                    input {
                        r#type: "url",
                        value: "{current.website}",
                        oninput: move |e| request.write().website = e.value(),
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    onclick: generate,
                    "Generate Posts"
                }
            }
        }
    }
}
