//! Page-level state: filters, list pages, the dashboard and display
//! formatting.

mod dashboard;
pub mod display;
mod filter;
mod page;

pub use dashboard::{Dashboard, DASHBOARD_LOAD_ERROR, RECENT_ACTIVITY_LIMIT};
pub use filter::{
    company_plan_counts, company_status_counts, contact_status_counts, sort_newest_first,
    ActivityQuery, CompanyQuery, ContactQuery, ReportQuery,
};
pub use page::{ListPage, LoadOutcome};
