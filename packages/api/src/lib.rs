//! Server API functions for the business dashboard.
//!
//! This crate contains the fullstack server functions the dashboard uses to
//! list, create, update and delete jobs. Everything derived from jobs
//! (customers, stats, exports) is computed client-side from the list.

mod jobs;

#[cfg(feature = "server")]
mod init;

pub use jobs::*;

#[cfg(feature = "server")]
pub use init::*;

// Re-export core types for convenience
pub use hauldesk_core::{Job, JobForm, JobId};
