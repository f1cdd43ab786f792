//! Contact records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Status;
use super::numeric::NumberInput;
use crate::storage::{Entity, Keyed, RecordId};

/// A person at a customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Free-text company name, not a reference
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub mrr: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// "First Last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Fields for creating or updating a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrr: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_address: Option<String>,
}

impl Entity for Contact {
    type Input = ContactInput;
    const KIND: &'static str = "Contact";

    fn build(input: &ContactInput, now: DateTime<Utc>) -> Self {
        let mut contact = Contact {
            id: 0,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            role: String::new(),
            status: Status::Trial,
            mrr: 0.0,
            notes: String::new(),
            job_title: None,
            department_name: None,
            department_id: None,
            job_summary: None,
            parent_contact_number: None,
            parent_address: None,
            created_at: now,
        };
        contact.apply(input);
        contact
    }

    fn apply(&mut self, input: &ContactInput) {
        overlay(&mut self.first_name, &input.first_name);
        overlay(&mut self.last_name, &input.last_name);
        overlay(&mut self.email, &input.email);
        overlay(&mut self.phone, &input.phone);
        overlay(&mut self.company, &input.company);
        overlay(&mut self.role, &input.role);
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(ref mrr) = input.mrr {
            self.mrr = mrr.resolve(0.0);
        }
        overlay(&mut self.notes, &input.notes);
        overlay_opt(&mut self.job_title, &input.job_title);
        overlay_opt(&mut self.department_name, &input.department_name);
        overlay_opt(&mut self.department_id, &input.department_id);
        overlay_opt(&mut self.job_summary, &input.job_summary);
        overlay_opt(&mut self.parent_contact_number, &input.parent_contact_number);
        overlay_opt(&mut self.parent_address, &input.parent_address);
    }
}

impl Keyed for Contact {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

pub(crate) fn overlay(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        target.clone_from(v);
    }
}

pub(crate) fn overlay_opt(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *target = Some(v.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_applies_defaults_and_coerces_mrr() {
        let now = Utc::now();
        let input = ContactInput {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            mrr: Some("250".into()),
            ..Default::default()
        };
        let contact = Contact::build(&input, now);
        assert_eq!(contact.full_name(), "Ada Lovelace");
        assert_eq!(contact.status, Status::Trial);
        assert_eq!(contact.mrr, 250.0);
        assert_eq!(contact.created_at, now);
        assert!(contact.job_title.is_none());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut contact = Contact::build(
            &ContactInput {
                email: Some("a@example.com".into()),
                mrr: Some(100.0.into()),
                ..Default::default()
            },
            Utc::now(),
        );
        contact.apply(&ContactInput {
            role: Some("CTO".into()),
            ..Default::default()
        });
        assert_eq!(contact.email, "a@example.com");
        assert_eq!(contact.mrr, 100.0);
        assert_eq!(contact.role, "CTO");
    }

    #[test]
    fn test_serializes_ui_field_names() {
        let contact = Contact::build(&ContactInput::default(), Utc::now());
        let value = serde_json::to_value(&contact).unwrap();
        assert!(value.get("Id").is_some());
        assert!(value.get("firstName").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("jobTitle").is_none());
    }
}
