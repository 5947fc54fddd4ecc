//! Marketing posts page.

use dioxus::prelude::*;
use hauldesk_core::GeneratedPosts;

use crate::dashboard::{PostForm, PostResults};

#[component]
pub fn PostsPage() -> Element {
    let mut generated = use_signal(|| None::<GeneratedPosts>);

    rsx! {
        div { class: "page-container",
            PostForm {
                on_generated: move |posts: GeneratedPosts| generated.set(Some(posts)),
            }

            if let Some(posts) = generated() {
                PostResults { posts }
            }
        }
    }
}
