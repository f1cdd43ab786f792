//! Table rows and detail lines for each record kind.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crm_core::model::{Activity, Company, Contact, Metric, Report, Status, SubscriptionPlan};
use crm_core::views::display::{format_change, format_currency, format_metric_value};
use crm_core::RecordId;

use crate::ui::format::{format_date, format_datetime, or_dash, single_line, truncate};
use crate::ui::theme::{
    activity_style, plan_style, status_style, styled, styles, trend_style, trend_symbol,
};
use crate::ui::{Column, UiContext};

/// Label/value pairs shown by `show`, `add` and `edit`.
pub type Details = Vec<(&'static str, String)>;

const DESCRIPTION_WIDTH: usize = 60;

fn status_cell(ui: &UiContext, status: Status) -> String {
    styled(status.as_str(), status_style(status), ui.color)
}

fn plan_cell(ui: &UiContext, plan: Option<SubscriptionPlan>) -> String {
    match plan {
        Some(plan) => styled(plan.as_str(), plan_style(plan), ui.color),
        None => "-".to_string(),
    }
}

fn when(ui: &UiContext, at: &DateTime<Utc>) -> String {
    format_datetime(at, ui.mode.is_pretty())
}

pub const CONTACT_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("Name"),
    Column::new("Email"),
    Column::new("Company"),
    Column::new("Role"),
    Column::new("Status"),
    Column::new("MRR"),
];

pub fn contact_row(ui: &UiContext, c: &Contact) -> Vec<String> {
    vec![
        c.id.to_string(),
        c.full_name(),
        c.email.clone(),
        or_dash(&c.company),
        or_dash(&c.role),
        status_cell(ui, c.status),
        format_currency(c.mrr),
    ]
}

pub fn contact_details(ui: &UiContext, c: &Contact) -> Details {
    let mut details = vec![
        ("ID", c.id.to_string()),
        ("Name", c.full_name()),
        ("Email", c.email.clone()),
        ("Phone", or_dash(&c.phone)),
        ("Company", or_dash(&c.company)),
        ("Role", or_dash(&c.role)),
        ("Status", status_cell(ui, c.status)),
        ("MRR", format_currency(c.mrr)),
    ];
    let extras = [
        ("Job Title", &c.job_title),
        ("Department", &c.department_name),
        ("Department ID", &c.department_id),
        ("Job Summary", &c.job_summary),
        ("Parent Contact", &c.parent_contact_number),
        ("Parent Address", &c.parent_address),
    ];
    for (label, value) in extras {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            details.push((label, value.to_string()));
        }
    }
    details.push(("Notes", or_dash(&single_line(&c.notes))));
    details.push(("Created", format_date(&c.created_at)));
    details
}

pub const COMPANY_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("Name"),
    Column::new("Industry"),
    Column::new("Employees"),
    Column::new("Plan"),
    Column::new("Status"),
    Column::new("MRR"),
];

pub fn company_row(ui: &UiContext, c: &Company) -> Vec<String> {
    vec![
        c.id.to_string(),
        c.name.clone(),
        c.industry.to_string(),
        c.employees.to_string(),
        plan_cell(ui, c.subscription_plan),
        status_cell(ui, c.status),
        format_currency(c.mrr),
    ]
}

pub fn company_details(ui: &UiContext, c: &Company) -> Details {
    vec![
        ("ID", c.id.to_string()),
        ("Name", c.name.clone()),
        ("Industry", c.industry.to_string()),
        ("Employees", c.employees.to_string()),
        ("Website", or_dash(&c.website)),
        ("Plan", plan_cell(ui, c.subscription_plan)),
        ("Status", status_cell(ui, c.status)),
        ("MRR", format_currency(c.mrr)),
        ("Created", format_date(&c.created_at)),
    ]
}

pub const ACTIVITY_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("Type"),
    Column::new("Description"),
    Column::new("Contact"),
    Column::new("When"),
];

/// Contact names keyed by id, for activity rows.
pub fn contact_names(contacts: &[Contact]) -> HashMap<RecordId, String> {
    contacts.iter().map(|c| (c.id, c.full_name())).collect()
}

pub fn activity_row(
    ui: &UiContext,
    a: &Activity,
    names: &HashMap<RecordId, String>,
) -> Vec<String> {
    let contact = names
        .get(&a.contact_id)
        .cloned()
        .unwrap_or_else(|| format!("#{}", a.contact_id));
    let description = single_line(&a.description);
    vec![
        a.id.to_string(),
        styled(a.kind.as_str(), activity_style(a.kind), ui.color),
        if ui.mode.is_pretty() {
            truncate(&description, DESCRIPTION_WIDTH)
        } else {
            description
        },
        contact,
        when(ui, &a.timestamp),
    ]
}

pub const REPORT_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("Name"),
    Column::new("Type"),
    Column::new("Source"),
    Column::new("Tags"),
    Column::new("Modified"),
];

pub fn report_row(ui: &UiContext, r: &Report) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.name.clone(),
        or_dash(&r.report_type),
        or_dash(&r.data_source),
        or_dash(&r.tag_list().join(", ")),
        r.modified_on
            .as_ref()
            .map(|at| when(ui, at))
            .unwrap_or_else(|| "-".to_string()),
    ]
}

pub fn report_details(_ui: &UiContext, r: &Report) -> Details {
    let link = |id: Option<RecordId>| id.map_or_else(|| "-".to_string(), |id| id.to_string());
    let mut details = vec![
        ("ID", r.id.to_string()),
        ("Name", r.name.clone()),
        ("Tags", or_dash(&r.tag_list().join(", "))),
        ("Type", or_dash(&r.report_type)),
        ("Data Source", or_dash(&r.data_source)),
        ("Filters", or_dash(&r.filters)),
        ("Layout", or_dash(&r.layout)),
        ("Format", or_dash(&r.format)),
        ("Display Fields", or_dash(&r.display_fields)),
        ("Filter Parameters", or_dash(&r.filter_parameters)),
        ("Activity", link(r.activity)),
        ("Company", link(r.company)),
        ("Contact", link(r.contact)),
        ("Metric", link(r.metric)),
    ];
    if let Some(created) = &r.created_on {
        details.push(("Created", format_date(created)));
    }
    if let Some(modified) = &r.modified_on {
        details.push(("Modified", format_date(modified)));
    }
    details
}

pub const METRIC_COLUMNS: &[Column] = &[
    Column::new("#"),
    Column::new("Metric"),
    Column::new("Value"),
    Column::new("Change"),
];

/// Metrics are addressed by position.
pub fn metric_row(ui: &UiContext, index: usize, m: &Metric) -> Vec<String> {
    let change = format!(
        "{} {}",
        trend_symbol(m.trend, ui.unicode),
        format_change(m.change)
    );
    vec![
        index.to_string(),
        m.label.clone(),
        styled(&format_metric_value(m), styles::bold(), ui.color),
        styled(&change, trend_style(m.trend), ui.color),
    ]
}

/// One-line tally: `trial 2 · active 3` (pretty) or `trial=2 active=3`.
pub fn tally_line<K: std::fmt::Display>(ui: &UiContext, counts: &[(K, usize)]) -> String {
    if ui.mode.is_pretty() {
        let parts: Vec<String> = counts
            .iter()
            .map(|(key, n)| format!("{} {}", styled(&key.to_string(), styles::dim(), ui.color), n))
            .collect();
        parts.join(" \u{00B7} ")
    } else {
        counts
            .iter()
            .map(|(key, n)| format!("{}={}", key.to_string().to_lowercase(), n))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
