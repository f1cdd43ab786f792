//! # CRM Core
//!
//! Record layer for a small customer-relationship manager: contacts,
//! companies, activities, dashboard metrics and saved reports.
//!
//! ## Architecture
//!
//! - **model**: UI-facing record shapes and mutation inputs
//! - **storage**: the `RecordRepository` trait and the in-memory mock stores
//! - **mapper**: field mapping between records and the backend schema
//! - **remote**: CRUD services over an injected backend client
//! - **notify**: user-facing notices
//! - **forms**: drafts, validation and guarded submission
//! - **views**: list page state, filters, dashboard and formatting
//! - **repositories**: mock or remote composition

pub mod error;
pub mod forms;
pub mod mapper;
pub mod model;
pub mod notify;
pub mod remote;
pub mod repositories;
pub mod storage;
pub mod views;

pub use error::{CrmError, Result};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use repositories::Repositories;
pub use storage::{Entity, Keyed, RecordId, RecordRepository};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
