// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::dashboard::pages::{CustomersPage, JobsPage, PostsPage};
use ui::dashboard::{NoticeBanner, StatsPanel};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DashboardLayout)]
        #[route("/")]
        Posts {},
        #[route("/jobs")]
        Jobs {},
        #[route("/customers")]
        Customers {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
        tracing::info!("Starting dashboard server");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One job list shared by every tab.
    ui::use_jobs_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Header, current-month stats and tab navigation around each page.
#[component]
fn DashboardLayout() -> Element {
    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { "Business Dashboard" }
                p { class: "dashboard-subtitle", "Jobs, customers and marketing in one place" }
            }

            NoticeBanner {}
            StatsPanel {}

            nav { class: "tab-nav",
                Link {
                    to: Route::Posts {},
                    class: "tab-link",
                    active_class: "active",
                    "📣 Social Posts"
                }
                Link {
                    to: Route::Jobs {},
                    class: "tab-link",
                    active_class: "active",
                    "🚚 Jobs"
                }
                Link {
                    to: Route::Customers {},
                    class: "tab-link",
                    active_class: "active",
                    "👥 Customers"
                }
            }

            main { class: "dashboard-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Posts() -> Element {
    rsx! {
        PostsPage {}
    }
}

#[component]
fn Jobs() -> Element {
    rsx! {
        JobsPage {}
    }
}

#[component]
fn Customers() -> Element {
    rsx! {
        CustomersPage {}
    }
}
