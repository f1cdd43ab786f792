use super::{unknown_field, FieldErrors, FormDraft};
use crate::error::Result;
use crate::model::{Activity, ActivityInput, ActivityType};
use crate::storage::RecordId;

/// Shortest accepted description, counted after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    pub kind: String,
    pub description: String,
    pub contact_id: String,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self {
            kind: ActivityType::Email.as_str().to_string(),
            description: String::new(),
            contact_id: String::new(),
        }
    }
}

impl ActivityDraft {
    fn contact(&self) -> Option<RecordId> {
        self.contact_id.trim().parse().ok()
    }
}

impl FormDraft for ActivityDraft {
    type Record = Activity;

    const FIELDS: &'static [&'static str] = &["type", "description", "contactId"];

    fn from_record(a: &Activity) -> Self {
        Self {
            kind: a.kind.as_str().to_string(),
            description: a.description.clone(),
            contact_id: a.contact_id.to_string(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "type" => &mut self.kind,
            "description" => &mut self.description,
            "contactId" => &mut self.contact_id,
            _ => return Err(unknown_field(field)),
        };
        *slot = value;
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.kind.trim().is_empty() {
            errors.insert("type", "Activity type is required");
        } else if self.kind.parse::<ActivityType>().is_err() {
            errors.insert("type", "Please select a valid activity type");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert("description", "Description is required");
        } else if description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.insert("description", "Description must be at least 10 characters");
        }

        if self.contact().is_none() {
            errors.insert("contactId", "Contact selection is required");
        }
        errors
    }

    fn to_input(&self) -> ActivityInput {
        ActivityInput {
            kind: self.kind.parse().ok(),
            description: Some(self.description.trim().to_string()),
            contact_id: self.contact(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_length_counts_trimmed_text() {
        let draft = ActivityDraft {
            description: "   too short   ".into(),
            contact_id: "2".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate().get("description"),
            Some("Description must be at least 10 characters")
        );

        let draft = ActivityDraft {
            description: "  Demo scheduled  ".into(),
            ..draft
        };
        assert!(draft.validate().is_empty());
        assert_eq!(draft.to_input().description.as_deref(), Some("Demo scheduled"));
    }

    #[test]
    fn test_contact_must_be_an_id() {
        let draft = ActivityDraft {
            description: "Renewal conversation".into(),
            contact_id: "Sarah".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate().get("contactId"), Some("Contact selection is required"));
    }
}
