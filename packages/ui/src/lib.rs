//! This crate contains all shared UI for the workspace.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod browser;
pub use browser::{confirm, copy_to_clipboard, download_csv, open_window, sleep_ms};

mod state;
pub use state::{JobsState, Notice, use_jobs_provider, use_jobs_state};

pub mod dashboard;
