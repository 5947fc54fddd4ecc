//! Full-page views, one per dashboard tab.

mod customers_page;
mod jobs_page;
mod posts_page;

pub use customers_page::CustomersPage;
pub use jobs_page::JobsPage;
pub use posts_page::PostsPage;
