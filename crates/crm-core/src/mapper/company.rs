use chrono::SecondsFormat;
use serde_json::Value;

use super::fields::{company as f, system};
use super::read::{self, float_value};
use super::{put, BackendRecord, RecordMapper};
use crate::model::{Company, CompanyInput, Industry, Status, SubscriptionPlan, DEFAULT_EMPLOYEES};
use crate::remote::DeletePolicy;

pub struct CompanyMapper;

impl RecordMapper for CompanyMapper {
    type Record = Company;

    const TABLE: &'static str = f::TABLE_NAME;
    const FIELDS: &'static [&'static str] = f::FIELDS;
    const ORDER_BY: &'static str = system::CREATED_ON;
    const DELETE_POLICY: DeletePolicy = DeletePolicy::AllOrNothing;

    fn to_backend(c: &Company) -> BackendRecord {
        let mut row = BackendRecord::new();
        row.insert(system::ID.into(), Value::from(c.id));
        row.insert(system::NAME.into(), Value::from(c.name.clone()));
        row.insert(f::INDUSTRY.into(), Value::from(c.industry.as_str()));
        row.insert(f::EMPLOYEES.into(), Value::from(c.employees));
        row.insert(f::WEBSITE.into(), Value::from(c.website.clone()));
        put(&mut row, f::SUBSCRIPTION_PLAN, c.subscription_plan.map(|p| p.as_str()));
        row.insert(f::STATUS.into(), Value::from(c.status.as_str()));
        row.insert(f::MRR.into(), float_value(c.mrr));
        row.insert(
            f::CREATED_AT.into(),
            Value::from(c.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        );
        row
    }

    fn input_to_backend(input: &CompanyInput) -> BackendRecord {
        let mut row = BackendRecord::new();
        put(&mut row, system::NAME, input.name.clone());
        put(&mut row, f::INDUSTRY, input.industry.map(|i| i.as_str()));
        put(
            &mut row,
            f::EMPLOYEES,
            input.employees.as_ref().map(|e| e.resolve_count(DEFAULT_EMPLOYEES)),
        );
        put(&mut row, f::WEBSITE, input.website.clone());
        put(&mut row, f::SUBSCRIPTION_PLAN, input.subscription_plan.map(|p| p.as_str()));
        put(&mut row, f::STATUS, input.status.map(|s| s.as_str()));
        put(&mut row, f::MRR, input.mrr.as_ref().map(|m| float_value(m.resolve(0.0))));
        row
    }

    fn from_backend(row: &BackendRecord) -> Company {
        Company {
            id: read::id(row, system::ID).unwrap_or_default(),
            name: read::text(row, system::NAME),
            industry: Industry::from_backend_str(&read::text(row, f::INDUSTRY)),
            employees: read::count(row, f::EMPLOYEES, DEFAULT_EMPLOYEES),
            website: read::text(row, f::WEBSITE),
            subscription_plan: read::optional_text(row, f::SUBSCRIPTION_PLAN)
                .map(|p| SubscriptionPlan::from_backend_str(&p)),
            status: Status::from_backend_str(&read::text(row, f::STATUS)),
            mrr: read::number(row, f::MRR, 0.0),
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

    fn sample() -> Company {
        let mut company = Company::build(
            &CompanyInput {
                name: Some("Initech".into()),
                industry: Some(Industry::RealEstate),
                employees: Some(120u32.into()),
                website: Some("https://initech.example".into()),
                subscription_plan: Some(SubscriptionPlan::Professional),
                status: Some(Status::Active),
                mrr: Some(4200.0.into()),
            },
            Utc::now(),
        );
        company.id = 9;
        company
    }

    #[test]
    fn test_round_trip_preserves_ui_fields() {
        let company = sample();
        let row = CompanyMapper::to_backend(&company);
        assert_eq!(row["industry_c"], "Real Estate");
        assert_eq!(CompanyMapper::from_backend(&row), company);
    }

    #[test]
    fn test_zero_employees_differs_from_missing() {
        let mut company = sample();
        company.employees = 0;
        let row = CompanyMapper::to_backend(&company);
        assert_eq!(CompanyMapper::from_backend(&row).employees, 0);

        let mut row = row;
        row.remove("employees_c");
        assert_eq!(CompanyMapper::from_backend(&row).employees, DEFAULT_EMPLOYEES);
    }

    #[test]
    fn test_string_numbers_and_unknown_enums() {
        let row = match json!({
            "Id": "3",
            "Name": "Umbrella",
            "industry_c": "Biotech",
            "employees_c": "75.9",
            "mrr_c": "oops",
            "subscription_plan_c": ""
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let company = CompanyMapper::from_backend(&row);
        assert_eq!(company.id, 3);
        assert_eq!(company.industry, Industry::Other);
        assert_eq!(company.employees, 75);
        assert_eq!(company.mrr, 0.0);
        assert_eq!(company.subscription_plan, None);
    }

    #[test]
    fn test_input_coerces_numeric_text() {
        let row = CompanyMapper::input_to_backend(&CompanyInput {
            employees: Some("50".into()),
            mrr: Some("1000".into()),
            ..Default::default()
        });
        assert_eq!(row["employees_c"], json!(50));
        assert_eq!(row["mrr_c"], json!(1000.0));
        assert_eq!(row.len(), 2);
    }
}
