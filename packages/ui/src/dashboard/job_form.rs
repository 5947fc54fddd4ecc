//! Job entry form with a live profit/loss preview.

use dioxus::prelude::*;
use hauldesk_core::{JobForm, JobId, MarketingSource, format_currency};

use crate::use_jobs_state;

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Labelled money input.
#[component]
fn AmountInput(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "form-group",
            label { "{label}" }
            input {
                r#type: "number",
                step: "0.01",
                min: "0",
                placeholder: "0.00",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Props for JobFormCard component.
#[derive(Props, Clone, PartialEq)]
pub struct JobFormCardProps {
    /// Form contents, owned by the page so the table can load a job into it.
    pub form: Signal<JobForm>,
    /// Job being edited; `None` while entering a new job.
    pub editing: Signal<Option<JobId>>,
}

/// Form for entering a new job or editing an existing one.
#[component]
pub fn JobFormCard(props: JobFormCardProps) -> Element {
    let state = use_jobs_state();
    let mut form = props.form;
    let mut editing = props.editing;
    let mut saving = use_signal(|| false);

    let current = form.read().clone();
    let preview = current.profit_loss();
    let is_editing = editing().is_some();

    let submit = move |_| {
        let submitted = form();
        if let Err(e) = submitted.validate() {
            state.error(e.to_string());
            return;
        }
        let editing_id = editing();

        spawn(async move {
            saving.set(true);

            let result = match editing_id {
                Some(id) => api::update_job(id.to_string(), submitted)
                    .await
                    .map(|_| "Job updated successfully!"),
                None => api::create_job(submitted)
                    .await
                    .map(|_| "Job saved successfully!"),
            };

            match result {
                Ok(msg) => {
                    form.set(JobForm::blank(today()));
                    editing.set(None);
                    state.reload().await;
                    state.success(msg);
                }
                Err(e) => state.error(format!("Failed to save job: {}", e)),
            }

            saving.set(false);
        });
    };

    let cancel = move |_| {
        form.set(JobForm::blank(today()));
        editing.set(None);
    };

    let profit_class = if preview.profit < 0.0 { "loss" } else { "profit" };
    let total_expenses = format_currency(preview.total_expenses);
    let profit = format_currency(preview.profit);
    let margin = format!("{:.1}%", preview.margin);

    rsx! {
        div { class: "card job-form",
            h2 {
                if is_editing { "Edit Job" } else { "New Job" }
            }

            div { class: "form-grid",
                div { class: "form-group",
                    label { "Date *" }
                    input {
                        r#type: "date",
                        value: "{current.date}",
                        oninput: move |e| form.write().date = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Customer Name *" }
                    input {
                        r#type: "text",
                        value: "{current.customer_name}",
                        oninput: move |e| form.write().customer_name = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Phone *" }
                    input {
                        r#type: "tel",
                        value: "{current.phone}",
                        oninput: move |e| form.write().phone = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: "{current.email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
                div { class: "form-group form-group-wide",
                    label { "Address *" }
                    input {
                        r#type: "text",
                        value: "{current.address}",
                        oninput: move |e| form.write().address = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Marketing Source *" }
                    select {
                        value: "{current.marketing_source}",
                        onchange: move |e| form.write().marketing_source = e.value(),

                        option { value: "", "Select source" }
                        for source in MarketingSource::ALL {
                            option {
                                key: "{source.as_str()}",
                                value: "{source.as_str()}",
                                "{source.as_str()}"
                            }
                        }
                    }
                }
            }

            h3 { "Revenue & Expenses" }
            div { class: "form-grid",
                AmountInput {
                    label: "Gross *",
                    value: current.gross.clone(),
                    oninput: move |v| form.write().gross = v,
                }
                AmountInput {
                    label: "Dump Fee",
                    value: current.dump_fee.clone(),
                    oninput: move |v| form.write().dump_fee = v,
                }
                AmountInput {
                    label: "Labor",
                    value: current.labor.clone(),
                    oninput: move |v| form.write().labor = v,
                }
                AmountInput {
                    label: "Gas",
                    value: current.gas.clone(),
                    oninput: move |v| form.write().gas = v,
                }
                AmountInput {
                    label: "U-Haul",
                    value: current.uhaul.clone(),
                    oninput: move |v| form.write().uhaul = v,
                }
                AmountInput {
                    label: "Other",
                    value: current.other_expenses.clone(),
                    oninput: move |v| form.write().other_expenses = v,
                }
            }

            // Live preview
            div { class: "profit-preview",
                div {
                    span { class: "preview-label", "Total Expenses" }
                    span { class: "preview-value", "{total_expenses}" }
                }
                div {
                    span { class: "preview-label", "Profit" }
                    span { class: "preview-value {profit_class}", "{profit}" }
                }
                div {
                    span { class: "preview-label", "Margin" }
                    span { class: "preview-value {profit_class}", "{margin}" }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: saving(),
                    onclick: submit,
                    if saving() {
                        "Saving..."
                    } else if is_editing {
                        "Update Job"
                    } else {
                        "Save Job"
                    }
                }
                if is_editing {
                    button {
                        class: "btn btn-secondary",
                        onclick: cancel,
                        "Cancel"
                    }
                }
            }
        }
    }
}
