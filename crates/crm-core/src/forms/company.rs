use url::Url;

use super::{required, unknown_field, FieldErrors, FormDraft};
use crate::error::Result;
use crate::model::numeric::parse_number;
use crate::model::{Company, CompanyInput, Industry, NumberInput, Status, SubscriptionPlan};

/// Prefix `https://` unless the address already names an http(s) scheme.
pub fn normalize_website(website: &str) -> String {
    let website = website.trim();
    if website.is_empty() || website.starts_with("http") {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}

fn is_valid_website(website: &str) -> bool {
    Url::parse(&normalize_website(website))
        .map(|url| url.host().is_some())
        .unwrap_or(false)
}

/// Company form fields as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyDraft {
    pub name: String,
    pub industry: String,
    pub employees: String,
    pub website: String,
    pub subscription_plan: String,
    pub status: String,
    pub mrr: String,
}

impl Default for CompanyDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            industry: String::new(),
            employees: String::new(),
            website: String::new(),
            subscription_plan: String::new(),
            status: Status::Trial.as_str().to_string(),
            mrr: String::new(),
        }
    }
}

impl FormDraft for CompanyDraft {
    type Record = Company;

    const FIELDS: &'static [&'static str] = &[
        "name",
        "industry",
        "employees",
        "website",
        "subscriptionPlan",
        "status",
        "mrr",
    ];

    fn from_record(c: &Company) -> Self {
        Self {
            name: c.name.clone(),
            industry: c.industry.as_str().to_string(),
            employees: c.employees.to_string(),
            website: c.website.clone(),
            subscription_plan: c
                .subscription_plan
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            status: c.status.as_str().to_string(),
            mrr: c.mrr.to_string(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "name" => &mut self.name,
            "industry" => &mut self.industry,
            "employees" => &mut self.employees,
            "website" => &mut self.website,
            "subscriptionPlan" => &mut self.subscription_plan,
            "status" => &mut self.status,
            "mrr" => &mut self.mrr,
            _ => return Err(unknown_field(field)),
        };
        *slot = value;
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "name", &self.name, "Company name is required");

        if self.industry.trim().is_empty() {
            errors.insert("industry", "Industry is required");
        } else if self.industry.parse::<Industry>().is_err() {
            errors.insert("industry", "Please select a valid industry");
        }

        let employees = parse_number(&self.employees).map(f64::trunc);
        if !employees.is_some_and(|n| n >= 1.0) {
            errors.insert("employees", "Employee count must be at least 1");
        }

        if !self.website.trim().is_empty() && !is_valid_website(&self.website) {
            errors.insert("website", "Please enter a valid website URL");
        }

        if self.subscription_plan.trim().is_empty() {
            errors.insert("subscriptionPlan", "Subscription plan is required");
        } else if self.subscription_plan.parse::<SubscriptionPlan>().is_err() {
            errors.insert("subscriptionPlan", "Please select a valid subscription plan");
        }

        if self.status.parse::<Status>().is_err() {
            errors.insert("status", "Please select a valid status");
        }

        if !parse_number(&self.mrr).is_some_and(|n| n >= 0.0) {
            errors.insert("mrr", "MRR must be 0 or greater");
        }
        errors
    }

    fn to_input(&self) -> CompanyInput {
        CompanyInput {
            name: Some(self.name.trim().to_string()),
            industry: self.industry.parse().ok(),
            employees: Some(NumberInput::Text(self.employees.clone())),
            website: Some(normalize_website(&self.website)),
            subscription_plan: self.subscription_plan.parse().ok(),
            status: self.status.parse().ok(),
            mrr: Some(NumberInput::Text(self.mrr.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CompanyDraft {
        CompanyDraft {
            name: "Globex".into(),
            industry: "Energy".into(),
            employees: "50".into(),
            website: "globex.com".into(),
            subscription_plan: "Professional".into(),
            status: "trial".into(),
            mrr: "1000".into(),
        }
    }

    #[test]
    fn test_valid_draft_normalizes_website() {
        let draft = valid();
        assert!(draft.validate().is_empty());
        let input = draft.to_input();
        assert_eq!(input.website.as_deref(), Some("https://globex.com"));
        assert_eq!(input.industry, Some(Industry::Energy));
        assert_eq!(input.employees.unwrap().resolve_count(1), 50);
    }

    #[test]
    fn test_website_normalization_keeps_scheme() {
        assert_eq!(normalize_website("http://a.io"), "http://a.io");
        assert_eq!(normalize_website(" a.io "), "https://a.io");
        assert_eq!(normalize_website(""), "");
    }

    #[test]
    fn test_rejections() {
        let draft = CompanyDraft {
            employees: "0".into(),
            website: "not a url".into(),
            mrr: "".into(),
            subscription_plan: "".into(),
            industry: "".into(),
            ..valid()
        };
        let errors = draft.validate();
        assert_eq!(errors.get("employees"), Some("Employee count must be at least 1"));
        assert_eq!(errors.get("website"), Some("Please enter a valid website URL"));
        assert_eq!(errors.get("mrr"), Some("MRR must be 0 or greater"));
        assert_eq!(errors.get("subscriptionPlan"), Some("Subscription plan is required"));
        assert_eq!(errors.get("industry"), Some("Industry is required"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_zero_mrr_is_valid() {
        let draft = CompanyDraft {
            mrr: "0".into(),
            ..valid()
        };
        assert!(draft.validate().is_empty());
    }
}
