//! Seed data for the mock stores, embedded at build time.

use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;

use crate::error::{CrmError, Result};
use crate::model::{Activity, Company, Contact, Metric, Report};

#[derive(RustEmbed)]
#[folder = "fixtures/"]
struct FixtureAssets;

/// Parse one embedded fixture file.
pub fn load<T: DeserializeOwned>(name: &str) -> Result<Vec<T>> {
    let file = FixtureAssets::get(name)
        .ok_or_else(|| CrmError::Fixture(format!("Missing fixture: {}", name)))?;
    serde_json::from_slice(&file.data)
        .map_err(|e| CrmError::Fixture(format!("Invalid fixture {}: {}", name, e)))
}

pub fn contacts() -> Result<Vec<Contact>> {
    load("contacts.json")
}

pub fn companies() -> Result<Vec<Company>> {
    load("companies.json")
}

pub fn activities() -> Result<Vec<Activity>> {
    load("activities.json")
}

pub fn metrics() -> Result<Vec<Metric>> {
    load("metrics.json")
}

pub fn reports() -> Result<Vec<Report>> {
    load("reports.json")
}
