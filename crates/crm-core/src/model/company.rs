//! Company records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::overlay;
use super::enums::{Industry, Status, SubscriptionPlan};
use super::numeric::NumberInput;
use crate::storage::{Entity, Keyed, RecordId};

/// Employee count used when the supplied value is not a number.
pub const DEFAULT_EMPLOYEES: u32 = 1;

/// A customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub industry: Industry,
    pub employees: u32,
    #[serde(default)]
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_plan: Option<SubscriptionPlan>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub mrr: f64,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or updating a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_plan: Option<SubscriptionPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrr: Option<NumberInput>,
}

impl Entity for Company {
    type Input = CompanyInput;
    const KIND: &'static str = "Company";

    fn build(input: &CompanyInput, now: DateTime<Utc>) -> Self {
        let mut company = Company {
            id: 0,
            name: String::new(),
            industry: Industry::Other,
            employees: DEFAULT_EMPLOYEES,
            website: String::new(),
            subscription_plan: None,
            status: Status::Trial,
            mrr: 0.0,
            created_at: now,
        };
        company.apply(input);
        company
    }

    fn apply(&mut self, input: &CompanyInput) {
        overlay(&mut self.name, &input.name);
        if let Some(industry) = input.industry {
            self.industry = industry;
        }
        if let Some(ref employees) = input.employees {
            self.employees = employees.resolve_count(DEFAULT_EMPLOYEES);
        }
        overlay(&mut self.website, &input.website);
        if let Some(plan) = input.subscription_plan {
            self.subscription_plan = Some(plan);
        }
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(ref mrr) = input.mrr {
            self.mrr = mrr.resolve(0.0);
        }
    }
}

impl Keyed for Company {
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
    fn test_build_coerces_numeric_text() {
        let input = CompanyInput {
            name: Some("Acme".into()),
            industry: Some(Industry::Technology),
            employees: Some("50".into()),
            mrr: Some("1000".into()),
            ..Default::default()
        };
        let company = Company::build(&input, Utc::now());
        assert_eq!(company.employees, 50);
        assert_eq!(company.mrr, 1000.0);
        assert_eq!(company.status, Status::Trial);
    }

    #[test]
    fn test_unparseable_employees_falls_back() {
        let input = CompanyInput {
            employees: Some("lots".into()),
            mrr: Some("".into()),
            ..Default::default()
        };
        let company = Company::build(&input, Utc::now());
        assert_eq!(company.employees, DEFAULT_EMPLOYEES);
        assert_eq!(company.mrr, 0.0);
    }
}
