//! Shared job list state.
//!
//! Every view derives what it shows (stats, customers, filtered tables) from
//! this one list, so a mutation is followed by a full reload.

use dioxus::prelude::*;
use hauldesk_core::Job;

use crate::sleep_ms;

const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// A transient message shown above the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Handle to the job list shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct JobsState {
    pub jobs: Signal<Vec<Job>>,
    pub loading: Signal<bool>,
    pub notice: Signal<Option<Notice>>,
}

impl JobsState {
    /// Fetch the full job list and replace the local copy.
    pub async fn reload(mut self) {
        self.loading.set(true);
        match api::list_jobs().await {
            Ok(list) => {
                tracing::debug!(count = list.len(), "Jobs loaded");
                self.jobs.set(list);
            }
            Err(e) => self.error(format!("Failed to load jobs: {}", e)),
        }
        self.loading.set(false);
    }

    /// Reload in the background.
    pub fn refresh(&self) {
        spawn(self.reload());
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.show(Notice::Success(msg.into()));
    }

    pub fn error(&self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::warn!("{}", msg);
        self.show(Notice::Error(msg));
    }

    pub fn dismiss(&self) {
        let mut notice = self.notice;
        notice.set(None);
    }

    fn show(&self, next: Notice) {
        let mut notice = self.notice;
        notice.set(Some(next.clone()));

        // Clear after a while unless a newer notice replaced it.
        spawn(async move {
            sleep_ms(NOTICE_TIMEOUT_MS).await;
            if notice.peek().as_ref() == Some(&next) {
                notice.set(None);
            }
        });
    }
}

/// Create the shared job state and start the initial load.
pub fn use_jobs_provider() -> JobsState {
    let jobs = use_signal(Vec::<Job>::new);
    let loading = use_signal(|| true);
    let notice = use_signal(|| None::<Notice>);

    let state = use_context_provider(|| JobsState {
        jobs,
        loading,
        notice,
    });
    use_hook(|| state.refresh());

    state
}

/// Access the job state provided by an ancestor.
pub fn use_jobs_state() -> JobsState {
    use_context::<JobsState>()
}
