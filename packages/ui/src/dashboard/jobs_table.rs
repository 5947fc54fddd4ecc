//! Job history table.

use dioxus::prelude::*;
use hauldesk_core::{Job, format_currency};

/// Props for JobsTable component.
#[derive(Props, Clone, PartialEq)]
pub struct JobsTableProps {
    /// Jobs to show, already filtered.
    pub jobs: Vec<Job>,
    /// Called when the user wants to edit a job.
    pub on_edit: EventHandler<Job>,
    /// Called when the user wants to delete a job.
    pub on_delete: EventHandler<Job>,
}

#[component]
pub fn JobsTable(props: JobsTableProps) -> Element {
    if props.jobs.is_empty() {
        return rsx! {
            div { class: "empty-state",
                p { "No jobs found" }
            }
        };
    }

    rsx! {
        div { class: "table-container",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Customer" }
                        th { "Phone" }
                        th { "Source" }
                        th { class: "text-right", "Gross" }
                        th { class: "text-right", "Expenses" }
                        th { class: "text-right", "Profit" }
                        th { class: "text-right", "Margin" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for job in props.jobs.iter().cloned() {
                        JobRow {
                            key: "{job.id}",
                            job,
                            on_edit: props.on_edit,
                            on_delete: props.on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn JobRow(job: Job, on_edit: EventHandler<Job>, on_delete: EventHandler<Job>) -> Element {
    let date = job.date.format("%b %-d, %Y").to_string();
    let gross = job.gross.map(format_currency).unwrap_or_else(|| "-".to_string());
    let expenses = format_currency(job.total_expenses);
    let profit = format_currency(job.profit);
    let margin = format!("{:.1}%", job.margin);
    let profit_class = if job.is_profitable() {
        "text-right profit"
    } else {
        "text-right loss"
    };

    let edit_job = job.clone();
    let delete_job = job.clone();

    rsx! {
        tr {
            td { "{date}" }
            td { class: "cell-strong", "{job.customer_name}" }
            td { "{job.phone}" }
            td {
                span { class: "source-badge", "{job.marketing_source}" }
            }
            td { class: "text-right", "{gross}" }
            td { class: "text-right", "{expenses}" }
            td { class: "{profit_class}", "{profit}" }
            td { class: "{profit_class}", "{margin}" }
            td { class: "row-actions",
                button {
                    class: "btn btn-sm btn-secondary",
                    onclick: move |_| on_edit.call(edit_job.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-sm btn-danger",
                    onclick: move |_| on_delete.call(delete_job.clone()),
                    "Delete"
                }
            }
        }
    }
}
