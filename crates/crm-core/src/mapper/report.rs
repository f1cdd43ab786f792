use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::fields::{report as f, system};
use super::read;
use super::{put, BackendRecord, RecordMapper};
use crate::model::{Report, ReportInput};
use crate::remote::DeletePolicy;
use crate::storage::RecordId;

pub struct ReportMapper;

fn timestamp_text(ts: Option<DateTime<Utc>>) -> Option<String> {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Empty strings are not sent.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

/// Unset or zero references are not sent.
fn reference(value: Option<RecordId>) -> Option<RecordId> {
    value.filter(|id| *id > 0)
}

impl RecordMapper for ReportMapper {
    type Record = Report;

    const TABLE: &'static str = f::TABLE_NAME;
    const FIELDS: &'static [&'static str] = f::FIELDS;
    const ORDER_BY: &'static str = system::MODIFIED_ON;
    const DELETE_POLICY: DeletePolicy = DeletePolicy::AllOrNothing;

    fn to_backend(r: &Report) -> BackendRecord {
        let mut row = BackendRecord::new();
        row.insert(system::ID.into(), Value::from(r.id));
        row.insert(system::NAME.into(), Value::from(r.name.clone()));
        row.insert(system::TAGS.into(), Value::from(r.tags.clone()));
        row.insert(f::REPORT_TYPE.into(), Value::from(r.report_type.clone()));
        row.insert(f::DATA_SOURCE.into(), Value::from(r.data_source.clone()));
        row.insert(f::FILTERS.into(), Value::from(r.filters.clone()));
        row.insert(f::LAYOUT.into(), Value::from(r.layout.clone()));
        row.insert(f::FORMAT.into(), Value::from(r.format.clone()));
        row.insert(f::DISPLAY_FIELDS.into(), Value::from(r.display_fields.clone()));
        row.insert(f::FILTER_PARAMETERS.into(), Value::from(r.filter_parameters.clone()));
        put(&mut row, f::ACTIVITY, r.activity);
        put(&mut row, f::COMPANY, r.company);
        put(&mut row, f::CONTACT, r.contact);
        put(&mut row, f::METRIC, r.metric);
        put(&mut row, system::CREATED_ON, timestamp_text(r.created_on));
        put(&mut row, system::MODIFIED_ON, timestamp_text(r.modified_on));
        row
    }

    fn input_to_backend(input: &ReportInput) -> BackendRecord {
        let mut row = BackendRecord::new();
        put(&mut row, system::NAME, non_empty(&input.name));
        put(&mut row, system::TAGS, non_empty(&input.tags));
        put(&mut row, f::REPORT_TYPE, non_empty(&input.report_type));
        put(&mut row, f::DATA_SOURCE, non_empty(&input.data_source));
        put(&mut row, f::FILTERS, non_empty(&input.filters));
        put(&mut row, f::LAYOUT, non_empty(&input.layout));
        put(&mut row, f::FORMAT, non_empty(&input.format));
        put(&mut row, f::DISPLAY_FIELDS, non_empty(&input.display_fields));
        put(&mut row, f::FILTER_PARAMETERS, non_empty(&input.filter_parameters));
        put(&mut row, f::ACTIVITY, reference(input.activity));
        put(&mut row, f::COMPANY, reference(input.company));
        put(&mut row, f::CONTACT, reference(input.contact));
        put(&mut row, f::METRIC, reference(input.metric));
        row
    }

    fn from_backend(row: &BackendRecord) -> Report {
        Report {
            id: read::id(row, system::ID).unwrap_or_default(),
            name: read::text(row, system::NAME),
            tags: read::text(row, system::TAGS),
            report_type: read::text(row, f::REPORT_TYPE),
            data_source: read::text(row, f::DATA_SOURCE),
            filters: read::text(row, f::FILTERS),
            layout: read::text(row, f::LAYOUT),
            format: read::text(row, f::FORMAT),
            display_fields: read::text(row, f::DISPLAY_FIELDS),
            filter_parameters: read::text(row, f::FILTER_PARAMETERS),
            activity: read::id(row, f::ACTIVITY),
            company: read::id(row, f::COMPANY),
            contact: read::id(row, f::CONTACT),
            metric: read::id(row, f::METRIC),
            created_on: read::timestamp(row, system::CREATED_ON),
            modified_on: read::timestamp(row, system::MODIFIED_ON),
        }
    }
}
