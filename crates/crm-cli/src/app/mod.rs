//! Application-level state for the CRM CLI.
//!
//! - Session setup over the mock repositories
//! - Per-command context (flags, UI settings)
//! - Notice printing

mod context;
mod notifier;

pub use context::{AppContext, Session};
