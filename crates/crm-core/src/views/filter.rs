//! Client-side search, filters and counters for the list pages.
//!
//! Search is a case-insensitive substring match; an empty search matches
//! everything. Filters set to `None` mean "all".

use crate::model::{Activity, ActivityType, Company, Contact, Report, Status, SubscriptionPlan};

fn matches(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty()
        || haystacks
            .iter()
            .any(|h| h.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    pub search: String,
    pub status: Option<Status>,
}

impl ContactQuery {
    pub fn matches(&self, c: &Contact) -> bool {
        let name = format!("{} {}", c.first_name, c.last_name);
        matches(&self.search, &[&name, &c.email, &c.company])
            && self.status.map_or(true, |s| s == c.status)
    }

    pub fn apply(&self, contacts: &[Contact]) -> Vec<Contact> {
        contacts.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyQuery {
    pub search: String,
    pub status: Option<Status>,
    pub plan: Option<SubscriptionPlan>,
}

impl CompanyQuery {
    pub fn matches(&self, c: &Company) -> bool {
        matches(&self.search, &[&c.name, c.industry.as_str(), &c.website])
            && self.status.map_or(true, |s| s == c.status)
            && self.plan.map_or(true, |p| c.subscription_plan == Some(p))
    }

    pub fn apply(&self, companies: &[Company]) -> Vec<Company> {
        companies.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    pub search: String,
    pub kind: Option<ActivityType>,
}

impl ActivityQuery {
    pub fn matches(&self, a: &Activity) -> bool {
        matches(&self.search, &[&a.description, a.kind.as_str()])
            && self.kind.map_or(true, |k| k == a.kind)
    }

    /// Matching activities, newest first.
    pub fn apply(&self, activities: &[Activity]) -> Vec<Activity> {
        let mut matched: Vec<Activity> = activities
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect();
        sort_newest_first(&mut matched);
        matched
    }
}

/// Stable sort by timestamp, newest first.
pub fn sort_newest_first(activities: &mut [Activity]) {
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub search: String,
}

impl ReportQuery {
    pub fn matches(&self, r: &Report) -> bool {
        matches(
            &self.search,
            &[&r.name, &r.report_type, &r.data_source, &r.tags],
        )
    }

    pub fn apply(&self, reports: &[Report]) -> Vec<Report> {
        reports.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn tally<T, K: Copy + PartialEq>(keys: &[K], items: &[T], key: impl Fn(&T) -> Option<K>) -> Vec<(K, usize)> {
    keys.iter()
        .map(|k| (*k, items.iter().filter(|i| key(i) == Some(*k)).count()))
        .collect()
}

/// Contacts per status, in `Status::ALL` order.
pub fn contact_status_counts(contacts: &[Contact]) -> Vec<(Status, usize)> {
    tally(Status::ALL, contacts, |c| Some(c.status))
}

pub fn company_status_counts(companies: &[Company]) -> Vec<(Status, usize)> {
    tally(Status::ALL, companies, |c| Some(c.status))
}

/// Companies per plan. Companies with no plan are not counted.
pub fn company_plan_counts(companies: &[Company]) -> Vec<(SubscriptionPlan, usize)> {
    tally(SubscriptionPlan::ALL, companies, |c| c.subscription_plan)
}
