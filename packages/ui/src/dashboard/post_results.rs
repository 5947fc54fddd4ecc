//! Generated posts with copy and share actions.

use dioxus::prelude::*;
use hauldesk_core::{GeneratedPosts, Platform, ShareTarget};

use crate::{JobsState, copy_to_clipboard, open_window, sleep_ms, use_jobs_state};

const SHARE_STAGGER_MS: u32 = 500;
const COPIED_RESET_MS: u32 = 2_000;

/// Carry out one share action.
async fn share(state: JobsState, platform: Platform, target: ShareTarget, text: String) {
    let result = match target {
        ShareTarget::Intent { url } => open_window(&url).await,
        ShareTarget::CopyAndOpen { url } => match copy_to_clipboard(&text).await {
            Ok(()) => open_window(url).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        state.error(format!("Could not open {}: {}", platform.name(), e));
    }
}

/// Props for PostResults component.
#[derive(Props, Clone, PartialEq)]
pub struct PostResultsProps {
    pub posts: GeneratedPosts,
}

#[component]
pub fn PostResults(props: PostResultsProps) -> Element {
    let state = use_jobs_state();
    let mut active = use_signal(|| Platform::Facebook);
    let mut selected = use_signal(|| Platform::ALL.to_vec());
    let mut copied = use_signal(|| None::<Platform>);

    let posts = props.posts.clone();
    let copy_posts = posts.clone();
    let share_posts = posts.clone();

    let copy_post = move |platform: Platform| {
        let text = copy_posts.get(platform).clipboard_text();
        spawn(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    copied.set(Some(platform));
                    state.success("Post copied to clipboard!");
                    sleep_ms(COPIED_RESET_MS).await;
                    if copied() == Some(platform) {
                        copied.set(None);
                    }
                }
                Err(e) => state.error(format!("Failed to copy post: {}", e)),
            }
        });
    };

    let share_selected = move |_| {
        // Keep the on-screen platform order regardless of click order.
        let chosen: Vec<Platform> = Platform::ALL
            .into_iter()
            .filter(|p| selected.read().contains(p))
            .collect();

        let plan = match share_posts.share_plan(&chosen) {
            Ok(plan) => plan,
            Err(e) => {
                state.error(e.to_string());
                return;
            }
        };
        state.success(format!("Opening {} platform(s)...", plan.len()));

        let posts = share_posts.clone();
        spawn(async move {
            for (index, (platform, target)) in plan.into_iter().enumerate() {
                if index > 0 {
                    sleep_ms(SHARE_STAGGER_MS).await;
                }
                let text = posts.get(platform).clipboard_text();
                share(state, platform, target, text).await;
            }
        });
    };

    let current = active();
    let post = posts.get(current).clone();
    let target = current.share_target(&post);
    let is_copied = copied() == Some(current);

    let share_one = move |_| {
        let target = target.clone();
        let text = post.clipboard_text();
        spawn(share(state, current, target, text));
    };

    let share_label = if current.supports_prefill() {
        format!("Share to {}", current.name())
    } else {
        format!("Copy & Open {}", current.name())
    };
    let active_post = posts.get(current).clone();

    rsx! {
        div { class: "card post-results",
            h2 { "Your Posts Are Ready! 🎉" }

            // Multi-platform share
            div { class: "share-panel",
                h3 { "Share to Multiple Platforms" }
                div { class: "platform-grid",
                    for platform in Platform::ALL {
                        label { key: "{platform.id()}", class: "platform-option",
                            input {
                                r#type: "checkbox",
                                checked: selected.read().contains(&platform),
                                onchange: move |e| {
                                    let mut list = selected.write();
                                    list.retain(|p| *p != platform);
                                    if e.checked() {
                                        list.push(platform);
                                    }
                                },
                            }
                            span { "{platform.icon()} {platform.name()}" }
                        }
                    }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-success",
                        onclick: share_selected,
                        "🚀 Share to Selected Platforms"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| selected.set(Platform::ALL.to_vec()),
                        "Select All"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| selected.set(Vec::new()),
                        "Clear All"
                    }
                }
                p { class: "info-note",
                    "Facebook and X open with your post pre-filled. Other platforms get the post copied to your clipboard so you can paste it in."
                }
            }

            // Per-platform tabs
            div { class: "tabs",
                for platform in Platform::ALL {
                    button {
                        key: "{platform.id()}",
                        class: if platform == current { "tab active" } else { "tab" },
                        onclick: move |_| active.set(platform),
                        "{platform.icon()} {platform.name()}"
                    }
                }
            }

            div { class: "tab-panel",
                textarea {
                    class: "post-text",
                    rows: 10,
                    readonly: true,
                    value: "{active_post.text}",
                }
                if let Some(hashtags) = active_post.hashtags.clone() {
                    p { class: "hashtags", "{hashtags}" }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| copy_post(current),
                        if is_copied { "✓ Copied" } else { "Copy Post" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: share_one,
                        "{share_label}"
                    }
                }
            }
        }
    }
}
