//! Saved report definitions.
//!
//! Reports keep the backend's field names in their UI shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::overlay;
use crate::storage::{Entity, Keyed, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(rename = "Name")]
    pub name: String,
    /// Comma-joined tag list
    #[serde(rename = "Tags", default)]
    pub tags: String,
    #[serde(rename = "report_type_c", default)]
    pub report_type: String,
    #[serde(rename = "data_source_c", default)]
    pub data_source: String,
    #[serde(rename = "filters_c", default)]
    pub filters: String,
    #[serde(rename = "layout_c", default)]
    pub layout: String,
    #[serde(rename = "format_c", default)]
    pub format: String,
    #[serde(rename = "display_fields_c", default)]
    pub display_fields: String,
    #[serde(rename = "filter_parameters_c", default)]
    pub filter_parameters: String,
    #[serde(rename = "activity_c", default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<RecordId>,
    #[serde(rename = "company_c", default, skip_serializing_if = "Option::is_none")]
    pub company: Option<RecordId>,
    #[serde(rename = "contact_c", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<RecordId>,
    #[serde(rename = "metric_c", default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<RecordId>,
    #[serde(rename = "CreatedOn", default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(rename = "ModifiedOn", default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

impl Report {
    /// Split `Tags` into trimmed, non-empty tags.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportInput {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(rename = "report_type_c", default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
    #[serde(rename = "data_source_c", default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(rename = "filters_c", default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    #[serde(rename = "layout_c", default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(rename = "format_c", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "display_fields_c", default, skip_serializing_if = "Option::is_none")]
    pub display_fields: Option<String>,
    #[serde(rename = "filter_parameters_c", default, skip_serializing_if = "Option::is_none")]
    pub filter_parameters: Option<String>,
    #[serde(rename = "activity_c", default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<RecordId>,
    #[serde(rename = "company_c", default, skip_serializing_if = "Option::is_none")]
    pub company: Option<RecordId>,
    #[serde(rename = "contact_c", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<RecordId>,
    #[serde(rename = "metric_c", default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<RecordId>,
}

impl Entity for Report {
    type Input = ReportInput;
    const KIND: &'static str = "Report";

    fn build(input: &ReportInput, now: DateTime<Utc>) -> Self {
        let mut report = Report {
            id: 0,
            name: String::new(),
            tags: String::new(),
            report_type: String::new(),
            data_source: String::new(),
            filters: String::new(),
            layout: String::new(),
            format: String::new(),
            display_fields: String::new(),
            filter_parameters: String::new(),
            activity: None,
            company: None,
            contact: None,
            metric: None,
            created_on: Some(now),
            modified_on: Some(now),
        };
        report.apply(input);
        report
    }

    fn apply(&mut self, input: &ReportInput) {
        overlay(&mut self.name, &input.name);
        overlay(&mut self.tags, &input.tags);
        overlay(&mut self.report_type, &input.report_type);
        overlay(&mut self.data_source, &input.data_source);
        overlay(&mut self.filters, &input.filters);
        overlay(&mut self.layout, &input.layout);
        overlay(&mut self.format, &input.format);
        overlay(&mut self.display_fields, &input.display_fields);
        overlay(&mut self.filter_parameters, &input.filter_parameters);
        if input.activity.is_some() {
            self.activity = input.activity;
        }
        if input.company.is_some() {
            self.company = input.company;
        }
        if input.contact.is_some() {
            self.contact = input.contact;
        }
        if input.metric.is_some() {
            self.metric = input.metric;
        }
    }
}

impl Keyed for Report {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_list_skips_blanks() {
        let report = Report::build(
            &ReportInput {
                tags: Some("sales, q3,, churn ".into()),
                ..Default::default()
            },
            Utc::now(),
        );
        assert_eq!(report.tag_list(), vec!["sales", "q3", "churn"]);
    }
}
