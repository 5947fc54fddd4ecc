//! Jobs page - job entry form plus the filterable job history.

use dioxus::prelude::*;
use hauldesk_core::{CsvExport, Job, JobForm, JobId, filter_jobs_by_month};

use crate::dashboard::{JobFormCard, JobsTable};
use crate::{confirm, download_csv, use_jobs_state};

#[component]
pub fn JobsPage() -> Element {
    let state = use_jobs_state();
    let mut form = use_signal(|| JobForm::blank(chrono::Local::now().date_naive()));
    let mut editing = use_signal(|| None::<JobId>);
    let mut month = use_signal(String::new);

    let visible = filter_jobs_by_month(&state.jobs.read(), &month());
    let loading = state.loading;
    let has_jobs = !state.jobs.read().is_empty();

    let on_edit = move |job: Job| {
        form.set(JobForm::from_job(&job));
        editing.set(Some(job.id));
    };

    let on_delete = move |job: Job| {
        spawn(async move {
            if !confirm("Are you sure you want to delete this job?").await {
                return;
            }
            match api::delete_job(job.id.to_string()).await {
                Ok(()) => {
                    // Drop a pending edit of the deleted job.
                    if editing() == Some(job.id) {
                        editing.set(None);
                        form.set(JobForm::blank(chrono::Local::now().date_naive()));
                    }
                    state.reload().await;
                    state.success("Job deleted");
                }
                Err(e) => state.error(format!("Failed to delete job: {}", e)),
            }
        });
    };

    let export = move |_| {
        let export = CsvExport::jobs(&state.jobs.read(), &month());
        spawn(async move {
            match download_csv(&export).await {
                Ok(()) => state.success(format!("Exported {}", export.filename)),
                Err(e) => state.error(format!("Export failed: {}", e)),
            }
        });
    };

    rsx! {
        div { class: "page-container",
            JobFormCard { form, editing }

            div { class: "card",
                div { class: "card-header",
                    h2 { "Job History" }
                    div { class: "toolbar",
                        input {
                            r#type: "month",
                            value: "{month}",
                            oninput: move |e| month.set(e.value()),
                        }
                        if !month().is_empty() {
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| month.set(String::new()),
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

                if loading() && !has_jobs {
                    div { class: "loading", "Loading jobs..." }
                } else {
                    JobsTable {
                        jobs: visible,
                        on_edit,
                        on_delete,
                    }
                }
            }
        }
    }
}
