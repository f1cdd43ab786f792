//! Logged customer interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::overlay;
use super::enums::ActivityType;
use crate::storage::{Entity, Keyed, RecordId};

/// An email, call or meeting with a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    /// Contact reference; the store does not check that it exists
    pub contact_id: RecordId,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ActivityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<RecordId>,
}

impl Entity for Activity {
    type Input = ActivityInput;
    const KIND: &'static str = "Activity";

    fn build(input: &ActivityInput, now: DateTime<Utc>) -> Self {
        let mut activity = Activity {
            id: 0,
            kind: ActivityType::Email,
            description: String::new(),
            contact_id: 0,
            timestamp: now,
        };
        activity.apply(input);
        activity
    }

    fn apply(&mut self, input: &ActivityInput) {
        if let Some(kind) = input.kind {
            self.kind = kind;
        }
        overlay(&mut self.description, &input.description);
        if let Some(contact_id) = input.contact_id {
            self.contact_id = contact_id;
        }
    }
}

impl Keyed for Activity {
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
    fn test_type_field_name() {
        let activity = Activity::build(
            &ActivityInput {
                kind: Some(ActivityType::Call),
                description: Some("Quarterly review call".into()),
                contact_id: Some(3),
            },
            Utc::now(),
        );
        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["type"], "call");
        assert_eq!(value["contactId"], 3);
    }
}
