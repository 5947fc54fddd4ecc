use dioxus::prelude::*;

use crate::use_jobs_state;

/// Shows the current notice, if any.
#[component]
pub fn NoticeBanner() -> Element {
    let state = use_jobs_state();
    let notice = state.notice;

    let Some(current) = notice() else {
        return rsx! {};
    };
    let banner_class = if current.is_error() {
        "error-banner"
    } else {
        "success-banner"
    };

    rsx! {
        div { class: "{banner_class}",
            span { "{current.text()}" }
            button {
                onclick: move |_| state.dismiss(),
                "×"
            }
        }
    }
}
