//! Business dashboard components: stats, jobs, customers and marketing posts.

mod customers_table;
mod job_form;
mod jobs_table;
mod notice_banner;
mod post_form;
mod post_results;
mod review_modal;
mod stats_panel;

pub mod pages;

pub use customers_table::CustomersTable;
pub use job_form::JobFormCard;
pub use jobs_table::JobsTable;
pub use notice_banner::NoticeBanner;
pub use post_form::PostForm;
pub use post_results::PostResults;
pub use review_modal::ReviewModal;
pub use stats_panel::{StatCard, StatsPanel};
