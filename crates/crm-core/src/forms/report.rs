use super::{required, unknown_field, FieldErrors, FormDraft};
use crate::error::Result;
use crate::model::{Report, ReportInput};
use crate::storage::RecordId;

/// Report form fields as typed. Reference fields hold record ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub name: String,
    pub tags: String,
    pub report_type: String,
    pub data_source: String,
    pub filters: String,
    pub layout: String,
    pub format: String,
    pub display_fields: String,
    pub filter_parameters: String,
    pub activity: String,
    pub company: String,
    pub contact: String,
    pub metric: String,
}

fn reference(value: &str) -> Option<RecordId> {
    value.trim().parse::<RecordId>().ok().filter(|id| *id > 0)
}

fn id_text(id: Option<RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

impl FormDraft for ReportDraft {
    type Record = Report;

    const FIELDS: &'static [&'static str] = &[
        "Name",
        "Tags",
        "report_type_c",
        "data_source_c",
        "filters_c",
        "layout_c",
        "format_c",
        "display_fields_c",
        "filter_parameters_c",
        "activity_c",
        "company_c",
        "contact_c",
        "metric_c",
    ];

    fn from_record(r: &Report) -> Self {
        Self {
            name: r.name.clone(),
            tags: r.tags.clone(),
            report_type: r.report_type.clone(),
            data_source: r.data_source.clone(),
            filters: r.filters.clone(),
            layout: r.layout.clone(),
            format: r.format.clone(),
            display_fields: r.display_fields.clone(),
            filter_parameters: r.filter_parameters.clone(),
            activity: id_text(r.activity),
            company: id_text(r.company),
            contact: id_text(r.contact),
            metric: id_text(r.metric),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "Name" => &mut self.name,
            "Tags" => &mut self.tags,
            "report_type_c" => &mut self.report_type,
            "data_source_c" => &mut self.data_source,
            "filters_c" => &mut self.filters,
            "layout_c" => &mut self.layout,
            "format_c" => &mut self.format,
            "display_fields_c" => &mut self.display_fields,
            "filter_parameters_c" => &mut self.filter_parameters,
            "activity_c" => &mut self.activity,
            "company_c" => &mut self.company,
            "contact_c" => &mut self.contact,
            "metric_c" => &mut self.metric,
            _ => return Err(unknown_field(field)),
        };
        *slot = value;
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "Name", &self.name, "Report name is required");
        for (field, value) in [
            ("activity_c", &self.activity),
            ("company_c", &self.company),
            ("contact_c", &self.contact),
            ("metric_c", &self.metric),
        ] {
            if !value.trim().is_empty() && reference(value).is_none() {
                errors.insert(field, "Must be a record ID");
            }
        }
        errors
    }

    fn to_input(&self) -> ReportInput {
        let text = |value: &str| Some(value.trim().to_string());
        ReportInput {
            name: text(&self.name),
            tags: text(&self.tags),
            report_type: text(&self.report_type),
            data_source: text(&self.data_source),
            filters: text(&self.filters),
            layout: text(&self.layout),
            format: text(&self.format),
            display_fields: text(&self.display_fields),
            filter_parameters: text(&self.filter_parameters),
            activity: reference(&self.activity),
            company: reference(&self.company),
            contact: reference(&self.contact),
            metric: reference(&self.metric),
        }
    }
}
