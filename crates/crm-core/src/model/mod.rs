//! UI-facing record shapes and their mutation inputs.

mod activity;
mod company;
mod contact;
mod enums;
mod metric;
pub mod numeric;
mod report;

pub use activity::{Activity, ActivityInput};
pub use company::{Company, CompanyInput, DEFAULT_EMPLOYEES};
pub use contact::{Contact, ContactInput};
pub use enums::{ActivityType, Industry, Status, SubscriptionPlan, Trend};
pub use metric::{Metric, MetricInput};
pub use numeric::NumberInput;
pub use report::{Report, ReportInput};
