//! Backend table and field names.
//!
//! These names are the backend schema. They are matched bit-exactly by the
//! remote service, so any change here is a schema change.

/// Fields every backend table carries.
pub mod system {
    pub const ID: &str = "Id";
    pub const NAME: &str = "Name";
    pub const TAGS: &str = "Tags";
    /// Read-only bookkeeping
    pub const CREATED_ON: &str = "CreatedOn";
    pub const CREATED_BY: &str = "CreatedBy";
    pub const MODIFIED_ON: &str = "ModifiedOn";
    pub const MODIFIED_BY: &str = "ModifiedBy";

    pub const BOOKKEEPING: &[&str] = &[CREATED_ON, CREATED_BY, MODIFIED_ON, MODIFIED_BY];
}

/// `contact_c` table.
pub mod contact {
    pub const TABLE_NAME: &str = "contact_c";

    pub const FIRST_NAME: &str = "first_name_c";
    pub const LAST_NAME: &str = "last_name_c";
    pub const EMAIL: &str = "email_c";
    pub const PHONE: &str = "phone_c";
    /// Free-text company name
    pub const COMPANY: &str = "company_c";
    pub const ROLE: &str = "role_c";
    pub const STATUS: &str = "status_c";
    pub const MRR: &str = "mrr_c";
    pub const NOTES: &str = "notes_c";
    /// Display name, kept in step with `Name`
    pub const NAME1: &str = "name1_c";
    pub const JOB_TITLE: &str = "job_title_c";
    pub const DEPARTMENT_NAME: &str = "department_name_c";
    pub const DEPARTMENT_ID: &str = "department_id_c";
    pub const JOB_SUMMARY: &str = "job_summary_c";
    pub const PARENT_CONTACT_NUMBER: &str = "parent_contact_number_c";
    pub const PARENT_ADDRESS: &str = "parent_address_c";
    pub const CREATED_AT: &str = "created_at_c";

    pub const FIELDS: &[&str] = &[
        super::system::ID,
        super::system::NAME,
        FIRST_NAME,
        LAST_NAME,
        EMAIL,
        PHONE,
        COMPANY,
        ROLE,
        STATUS,
        MRR,
        NOTES,
        NAME1,
        JOB_TITLE,
        DEPARTMENT_NAME,
        DEPARTMENT_ID,
        JOB_SUMMARY,
        PARENT_CONTACT_NUMBER,
        PARENT_ADDRESS,
        CREATED_AT,
        super::system::CREATED_ON,
        super::system::CREATED_BY,
        super::system::MODIFIED_ON,
        super::system::MODIFIED_BY,
    ];
}

/// `company_c` table.
pub mod company {
    pub const TABLE_NAME: &str = "company_c";

    pub const INDUSTRY: &str = "industry_c";
    pub const EMPLOYEES: &str = "employees_c";
    pub const WEBSITE: &str = "website_c";
    pub const SUBSCRIPTION_PLAN: &str = "subscription_plan_c";
    pub const STATUS: &str = "status_c";
    pub const MRR: &str = "mrr_c";
    pub const CREATED_AT: &str = "created_at_c";

    pub const FIELDS: &[&str] = &[
        super::system::ID,
        super::system::NAME,
        INDUSTRY,
        EMPLOYEES,
        WEBSITE,
        SUBSCRIPTION_PLAN,
        STATUS,
        MRR,
        CREATED_AT,
        super::system::CREATED_ON,
        super::system::CREATED_BY,
        super::system::MODIFIED_ON,
        super::system::MODIFIED_BY,
    ];
}

/// `metric_c` table.
pub mod metric {
    pub const TABLE_NAME: &str = "metric_c";

    pub const LABEL: &str = "label_c";
    pub const VALUE: &str = "value_c";
    pub const CHANGE: &str = "change_c";
    pub const TREND: &str = "trend_c";

    pub const FIELDS: &[&str] = &[
        super::system::ID,
        super::system::NAME,
        LABEL,
        VALUE,
        CHANGE,
        TREND,
        super::system::CREATED_ON,
        super::system::CREATED_BY,
        super::system::MODIFIED_ON,
        super::system::MODIFIED_BY,
    ];
}

/// `report_c` table.
///
/// The UI shape of a report uses these names directly.
pub mod report {
    pub const TABLE_NAME: &str = "report_c";

    pub const REPORT_TYPE: &str = "report_type_c";
    pub const DATA_SOURCE: &str = "data_source_c";
    pub const FILTERS: &str = "filters_c";
    pub const LAYOUT: &str = "layout_c";
    pub const FORMAT: &str = "format_c";
    pub const DISPLAY_FIELDS: &str = "display_fields_c";
    pub const FILTER_PARAMETERS: &str = "filter_parameters_c";
    /// Lookup columns; values are ids or `{Id, Name}` objects
    pub const ACTIVITY: &str = "activity_c";
    pub const COMPANY: &str = "company_c";
    pub const CONTACT: &str = "contact_c";
    pub const METRIC: &str = "metric_c";

    pub const FIELDS: &[&str] = &[
        super::system::ID,
        super::system::NAME,
        super::system::TAGS,
        super::system::CREATED_ON,
        super::system::CREATED_BY,
        super::system::MODIFIED_ON,
        super::system::MODIFIED_BY,
        REPORT_TYPE,
        DATA_SOURCE,
        FILTERS,
        LAYOUT,
        FORMAT,
        DISPLAY_FIELDS,
        FILTER_PARAMETERS,
        ACTIVITY,
        COMPANY,
        CONTACT,
        METRIC,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_lists_have_no_duplicates() {
        for fields in [contact::FIELDS, company::FIELDS, metric::FIELDS, report::FIELDS] {
            let unique: HashSet<_> = fields.iter().collect();
            assert_eq!(unique.len(), fields.len());
        }
    }

    #[test]
    fn test_field_lists_select_id_and_bookkeeping() {
        for fields in [contact::FIELDS, company::FIELDS, metric::FIELDS, report::FIELDS] {
            assert!(fields.contains(&system::ID));
            assert!(fields.contains(&system::NAME));
            for field in system::BOOKKEEPING {
                assert!(fields.contains(field));
            }
        }
    }
}
