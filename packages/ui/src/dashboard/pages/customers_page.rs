//! Customers page - customers derived from job history, with search and
//! review requests.

use dioxus::prelude::*;
use hauldesk_core::{CsvExport, Customer, CustomerFilter, aggregate_customers};

use crate::dashboard::{CustomersTable, ReviewModal};
use crate::{download_csv, use_jobs_state};

#[component]
pub fn CustomersPage() -> Element {
    let state = use_jobs_state();
    let mut filter = use_signal(CustomerFilter::default);
    let mut reviewing = use_signal(|| None::<Customer>);

    // Rebuilt from the current job list on every render.
    let customers = aggregate_customers(&state.jobs.read());
    let visible = filter.read().apply(&customers);
    let total = customers.len();
    let shown = visible.len();
    let current = filter.read().clone();

    let export = move |_| {
        let export = CsvExport::customers(&state.jobs.read());
        spawn(async move {
            match download_csv(&export).await {
                Ok(()) => state.success(format!("Exported {}", export.filename)),
                Err(e) => state.error(format!("Export failed: {}", e)),
            }
        });
    };

    rsx! {
        div { class: "page-container",
            div { class: "card",
                div { class: "card-header",
                    h2 { "Customers" }
                    div { class: "toolbar",
                        input {
                            r#type: "search",
                            placeholder: "Search name, phone or email",
                            value: "{current.search}",
                            oninput: move |e| filter.write().search = e.value(),
                        }
                        input {
                            r#type: "month",
                            value: "{current.month}",
                            oninput: move |e| filter.write().month = e.value(),
                        }
                        if current.is_active() {
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| filter.set(CustomerFilter::default()),
                                "Clear"
                            }
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: export,
                            "Export CSV"
                        }
                    }
                }

                if current.is_active() {
                    p { class: "result-count", "Showing {shown} of {total} customers" }
                }

                CustomersTable {
                    customers: visible,
                    on_review: move |customer: Customer| reviewing.set(Some(customer)),
                }
            }

            if let Some(customer) = reviewing() {
                ReviewModal {
                    customer,
                    on_close: move |_| reviewing.set(None),
                }
            }
        }
    }
}
