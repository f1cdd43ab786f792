use chrono::SecondsFormat;
use serde_json::Value;

use super::fields::{contact as f, system};
use super::read::{self, float_value};
use super::{put, BackendRecord, RecordMapper};
use crate::model::{Contact, ContactInput, Status};
use crate::remote::{DeletePolicy, FailurePolicy};

pub struct ContactMapper;

fn display_name(first: &str, last: &str) -> String {
    format!("{} {}", first, last).trim().to_string()
}

/// `Name` and `name1_c` both carry the display name.
fn put_name(row: &mut BackendRecord, name: String) {
    row.insert(system::NAME.into(), Value::from(name.clone()));
    row.insert(f::NAME1.into(), Value::from(name));
}

impl RecordMapper for ContactMapper {
    type Record = Contact;

    const TABLE: &'static str = f::TABLE_NAME;
    const FIELDS: &'static [&'static str] = f::FIELDS;
    const ORDER_BY: &'static str = system::CREATED_ON;
    const DELETE_POLICY: DeletePolicy = DeletePolicy::AnySuccess;
    const CREATE_FAILURE: FailurePolicy = FailurePolicy::Raise;

    fn to_backend(c: &Contact) -> BackendRecord {
        let mut row = BackendRecord::new();
        row.insert(system::ID.into(), Value::from(c.id));
        put_name(&mut row, c.full_name());
        row.insert(f::FIRST_NAME.into(), Value::from(c.first_name.clone()));
        row.insert(f::LAST_NAME.into(), Value::from(c.last_name.clone()));
        row.insert(f::EMAIL.into(), Value::from(c.email.clone()));
        row.insert(f::PHONE.into(), Value::from(c.phone.clone()));
        row.insert(f::COMPANY.into(), Value::from(c.company.clone()));
        row.insert(f::ROLE.into(), Value::from(c.role.clone()));
        row.insert(f::STATUS.into(), Value::from(c.status.as_str()));
        row.insert(f::MRR.into(), float_value(c.mrr));
        row.insert(f::NOTES.into(), Value::from(c.notes.clone()));
        put(&mut row, f::JOB_TITLE, c.job_title.clone());
        put(&mut row, f::DEPARTMENT_NAME, c.department_name.clone());
        put(&mut row, f::DEPARTMENT_ID, c.department_id.clone());
        put(&mut row, f::JOB_SUMMARY, c.job_summary.clone());
        put(&mut row, f::PARENT_CONTACT_NUMBER, c.parent_contact_number.clone());
        put(&mut row, f::PARENT_ADDRESS, c.parent_address.clone());
        row.insert(
            f::CREATED_AT.into(),
            Value::from(c.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        );
        row
    }

    fn input_to_backend(input: &ContactInput) -> BackendRecord {
        let mut row = BackendRecord::new();
        if let (Some(first), Some(last)) = (&input.first_name, &input.last_name) {
            put_name(&mut row, display_name(first, last));
        }
        put(&mut row, f::FIRST_NAME, input.first_name.clone());
        put(&mut row, f::LAST_NAME, input.last_name.clone());
        put(&mut row, f::EMAIL, input.email.clone());
        put(&mut row, f::PHONE, input.phone.clone());
        put(&mut row, f::COMPANY, input.company.clone());
        put(&mut row, f::ROLE, input.role.clone());
        put(&mut row, f::STATUS, input.status.map(|s| s.as_str()));
        put(&mut row, f::MRR, input.mrr.as_ref().map(|m| float_value(m.resolve(0.0))));
        put(&mut row, f::NOTES, input.notes.clone());
        put(&mut row, f::JOB_TITLE, input.job_title.clone());
        put(&mut row, f::DEPARTMENT_NAME, input.department_name.clone());
        put(&mut row, f::DEPARTMENT_ID, input.department_id.clone());
        put(&mut row, f::JOB_SUMMARY, input.job_summary.clone());
        put(&mut row, f::PARENT_CONTACT_NUMBER, input.parent_contact_number.clone());
        put(&mut row, f::PARENT_ADDRESS, input.parent_address.clone());
        row
    }

    /// A rename that changes one half of the name needs the other half.
    fn update_needs_current(input: &ContactInput) -> bool {
        input.first_name.is_some() != input.last_name.is_some()
    }

    fn update_to_backend(input: &ContactInput, current: Option<&Contact>) -> BackendRecord {
        let mut row = Self::input_to_backend(input);
        if let Some(current) = current.filter(|_| Self::update_needs_current(input)) {
            let first = input.first_name.as_deref().unwrap_or(&current.first_name);
            let last = input.last_name.as_deref().unwrap_or(&current.last_name);
            put_name(&mut row, display_name(first, last));
        }
        row
    }

    fn from_backend(row: &BackendRecord) -> Contact {
        Contact {
            id: read::id(row, system::ID).unwrap_or_default(),
            first_name: read::text(row, f::FIRST_NAME),
            last_name: read::text(row, f::LAST_NAME),
            email: read::text(row, f::EMAIL),
            phone: read::text(row, f::PHONE),
            company: read::text(row, f::COMPANY),
            role: read::text(row, f::ROLE),
            status: Status::from_backend_str(&read::text(row, f::STATUS)),
            mrr: read::number(row, f::MRR, 0.0),
            notes: read::text(row, f::NOTES),
            job_title: read::optional_text(row, f::JOB_TITLE),
            department_name: read::optional_text(row, f::DEPARTMENT_NAME),
            department_id: read::optional_text(row, f::DEPARTMENT_ID),
            job_summary: read::optional_text(row, f::JOB_SUMMARY),
            parent_contact_number: read::optional_text(row, f::PARENT_CONTACT_NUMBER),
            parent_address: read::optional_text(row, f::PARENT_ADDRESS),
            created_at: read::first_timestamp(row, &[f::CREATED_AT, system::CREATED_ON]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Entity;
    use chrono::Utc;
    use serde_json::json;

    fn sample() -> Contact {
        let mut contact = Contact::build(
            &ContactInput {
                first_name: Some("Grace".into()),
                last_name: Some("Hopper".into()),
                email: Some("grace@navy.mil".into()),
                phone: Some("555-0100".into()),
                company: Some("Navy".into()),
                role: Some("Rear Admiral".into()),
                status: Some(Status::Active),
                mrr: Some(1250.5.into()),
                notes: Some("Wrote the first compiler".into()),
                job_title: Some("Admiral".into()),
                department_name: Some("Research".into()),
                ..Default::default()
            },
            Utc::now(),
        );
        contact.id = 42;
        contact
    }

    #[test]
    fn test_round_trip_preserves_ui_fields() {
        let contact = sample();
        let row = ContactMapper::to_backend(&contact);
        assert_eq!(row["Name"], "Grace Hopper");
        assert_eq!(row["name1_c"], "Grace Hopper");
        assert_eq!(ContactMapper::from_backend(&row), contact);
    }

    #[test]
    fn test_zero_mrr_survives_round_trip() {
        let mut contact = sample();
        contact.mrr = 0.0;
        let row = ContactMapper::to_backend(&contact);
        assert_eq!(row["mrr_c"], json!(0.0));
        assert_eq!(ContactMapper::from_backend(&row).mrr, 0.0);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let mut row = BackendRecord::new();
        row.insert("Id".into(), json!(5));
        row.insert("CreatedOn".into(), json!("2024-02-01T00:00:00Z"));
        let contact = ContactMapper::from_backend(&row);
        assert_eq!(contact.id, 5);
        assert_eq!(contact.first_name, "");
        assert_eq!(contact.status, Status::Trial);
        assert_eq!(contact.mrr, 0.0);
        assert!(contact.job_title.is_none());
        assert_eq!(contact.created_at.to_rfc3339(), "2024-02-01T00:00:00+00:00");
    }

    #[test]
    fn test_input_payload_only_carries_present_fields() {
        let row = ContactMapper::input_to_backend(&ContactInput {
            email: Some("new@example.com".into()),
            mrr: Some("".into()),
            ..Default::default()
        });
        assert_eq!(row.len(), 2);
        assert_eq!(row["email_c"], "new@example.com");
        assert_eq!(row["mrr_c"], json!(0.0));
        assert!(!row.contains_key("Name"));
    }

    #[test]
    fn test_partial_rename_rebuilds_display_name() {
        let current = sample();
        let input = ContactInput {
            last_name: Some("Murray".into()),
            ..Default::default()
        };
        assert!(ContactMapper::update_needs_current(&input));

        let row = ContactMapper::update_to_backend(&input, Some(&current));
        assert_eq!(row["Name"], "Grace Murray");
        assert_eq!(row["name1_c"], "Grace Murray");
        assert_eq!(row["last_name_c"], "Murray");
        assert!(!row.contains_key("first_name_c"));
    }

    #[test]
    fn test_update_without_name_change_skips_lookup() {
        let input = ContactInput {
            email: Some("grace@example.com".into()),
            ..Default::default()
        };
        assert!(!ContactMapper::update_needs_current(&input));
        assert!(!ContactMapper::update_to_backend(&input, None).contains_key("Name"));
    }
}
