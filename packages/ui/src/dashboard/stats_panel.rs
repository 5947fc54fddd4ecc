//! Current-month summary cards.

use dioxus::prelude::*;
use hauldesk_core::{DashboardStats, format_currency};

use crate::use_jobs_state;

/// A single labelled figure.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    icon: String,
    #[props(default)] negative: bool,
) -> Element {
    let value_class = if negative {
        "stat-card-value loss"
    } else {
        "stat-card-value"
    };

    rsx! {
        div { class: "stat-card",
            span { class: "stat-card-icon", "{icon}" }
            div { class: "{value_class}", "{value}" }
            div { class: "stat-card-label", "{label}" }
        }
    }
}

/// Jobs, customers, revenue and profit for the current calendar month.
#[component]
pub fn StatsPanel() -> Element {
    let state = use_jobs_state();
    let today = chrono::Local::now().date_naive();
    let stats = DashboardStats::for_month_of(&state.jobs.read(), today);

    rsx! {
        div { class: "stats-grid",
            StatCard {
                label: "Jobs This Month",
                value: stats.job_count.to_string(),
                icon: "🚚",
            }
            StatCard {
                label: "Customers",
                value: stats.customer_count.to_string(),
                icon: "👥",
            }
            StatCard {
                label: "Revenue",
                value: format_currency(stats.total_gross),
                icon: "💵",
            }
            StatCard {
                label: "Profit",
                value: format_currency(stats.total_profit),
                icon: "📈",
                negative: stats.is_loss(),
            }
        }
    }
}
