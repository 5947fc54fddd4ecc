//! Customer list derived from job history.

use dioxus::prelude::*;
use hauldesk_core::{Customer, format_currency};

/// Props for CustomersTable component.
#[derive(Props, Clone, PartialEq)]
pub struct CustomersTableProps {
    pub customers: Vec<Customer>,
    /// Called when "Send Review" is clicked for a customer.
    pub on_review: EventHandler<Customer>,
}

#[component]
pub fn CustomersTable(props: CustomersTableProps) -> Element {
    if props.customers.is_empty() {
        return rsx! {
            div { class: "empty-state",
                p { "No customers found" }
            }
        };
    }

    rsx! {
        div { class: "table-container",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Phone" }
                        th { "Email" }
                        th { "Address" }
                        th { class: "text-right", "Jobs" }
                        th { class: "text-right", "Total Spent" }
                        th { "Last Job" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for customer in props.customers.iter().cloned() {
                        CustomerRow {
                            key: "{customer.phone}",
                            customer,
                            on_review: props.on_review,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CustomerRow(customer: Customer, on_review: EventHandler<Customer>) -> Element {
    let email = if customer.has_email() {
        customer.email.clone()
    } else {
        "-".to_string()
    };
    let total_spent = format_currency(customer.total_spent);
    let last_job = customer.last_job_date.format("%b %-d, %Y").to_string();
    let job_count = customer.job_count();

    let review_customer = customer.clone();

    rsx! {
        tr {
            td { class: "cell-strong", "{customer.name}" }
            td { "{customer.phone}" }
            td { "{email}" }
            td { "{customer.address}" }
            td { class: "text-right", "{job_count}" }
            td { class: "text-right profit", "{total_spent}" }
            td { "{last_job}" }
            td { class: "row-actions",
                button {
                    class: "btn btn-sm btn-primary",
                    onclick: move |_| on_review.call(review_customer.clone()),
                    "Send Review"
                }
            }
        }
    }
}
