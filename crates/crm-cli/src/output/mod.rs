//! Output formatting helpers for the CLI.
//!
//! JSON shapes for `--json` and table rows / detail lines for the text
//! modes, one set per record kind.

mod json;
mod text;

pub use json::{dashboard_json, deleted_json, metrics_json, record_json};
pub use text::{
    activity_row, company_details, company_row, contact_details, contact_names, contact_row,
    metric_row, report_details, report_row, tally_line, Details, ACTIVITY_COLUMNS,
    COMPANY_COLUMNS, CONTACT_COLUMNS, METRIC_COLUMNS, REPORT_COLUMNS,
};
