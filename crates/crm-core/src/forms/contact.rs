use super::{required, unknown_field, FieldErrors, FormDraft};
use crate::error::Result;
use crate::model::numeric::parse_number;
use crate::model::{Contact, ContactInput, NumberInput, Status};

/// Contact form fields as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: String,
    pub status: String,
    pub mrr: String,
    pub notes: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            role: String::new(),
            status: Status::Trial.as_str().to_string(),
            mrr: "0".to_string(),
            notes: String::new(),
        }
    }
}

impl FormDraft for ContactDraft {
    type Record = Contact;

    const FIELDS: &'static [&'static str] = &[
        "firstName", "lastName", "email", "phone", "company", "role", "status", "mrr", "notes",
    ];

    fn from_record(c: &Contact) -> Self {
        Self {
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            company: c.company.clone(),
            role: c.role.clone(),
            status: c.status.as_str().to_string(),
            mrr: c.mrr.to_string(),
            notes: c.notes.clone(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "company" => &mut self.company,
            "role" => &mut self.role,
            "status" => &mut self.status,
            "mrr" => &mut self.mrr,
            "notes" => &mut self.notes,
            _ => return Err(unknown_field(field)),
        };
        *slot = value;
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "firstName", &self.first_name, "First name is required");
        required(&mut errors, "lastName", &self.last_name, "Last name is required");
        required(&mut errors, "email", &self.email, "Email is required");
        required(&mut errors, "company", &self.company, "Company is required");
        required(&mut errors, "role", &self.role, "Role is required");
        if self.status.parse::<Status>().is_err() {
            errors.insert("status", "Please select a valid status");
        }
        if !self.mrr.trim().is_empty() && !parse_number(&self.mrr).is_some_and(|n| n >= 0.0) {
            errors.insert("mrr", "MRR must be 0 or greater");
        }
        errors
    }

    fn to_input(&self) -> ContactInput {
        ContactInput {
            first_name: Some(self.first_name.trim().to_string()),
            last_name: Some(self.last_name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            company: Some(self.company.trim().to_string()),
            role: Some(self.role.trim().to_string()),
            status: self.status.parse().ok(),
            mrr: Some(NumberInput::Text(self.mrr.clone())),
            notes: Some(self.notes.clone()),
            ..Default::default()
        }
    }
}
