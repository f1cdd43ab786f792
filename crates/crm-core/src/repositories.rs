//! Repository composition.
//!
//! Pages and forms hold a [`Repositories`] and never know which family
//! backs it. The choice is made once, here.

use std::sync::Arc;

use crate::error::Result;
use crate::mapper::{CompanyMapper, ContactMapper, MetricMapper, ReportMapper};
use crate::model::{Activity, Company, Contact, Metric, Report};
use crate::notify::Notifier;
use crate::remote::{BackendClient, RemoteService};
use crate::storage::{fixtures, IndexedStore, Latency, MockStore, RecordRepository};

/// One repository per record kind.
#[derive(Clone)]
pub struct Repositories {
    pub contacts: Arc<dyn RecordRepository<Contact>>,
    pub companies: Arc<dyn RecordRepository<Company>>,
    pub activities: Arc<dyn RecordRepository<Activity>>,
    pub metrics: Arc<dyn RecordRepository<Metric>>,
    pub reports: Arc<dyn RecordRepository<Report>>,
}

impl Repositories {
    /// Mock stores seeded from the embedded fixtures. With
    /// `simulate_latency` off every call completes immediately.
    pub fn mock(simulate_latency: bool) -> Result<Self> {
        let pick = |profile: Latency| {
            if simulate_latency {
                profile
            } else {
                Latency::NONE
            }
        };
        Ok(Self {
            contacts: Arc::new(MockStore::new(fixtures::contacts()?, pick(Latency::RECORDS))),
            companies: Arc::new(MockStore::new(fixtures::companies()?, pick(Latency::RECORDS))),
            activities: Arc::new(MockStore::new(
                fixtures::activities()?,
                pick(Latency::ACTIVITIES),
            )),
            metrics: Arc::new(IndexedStore::new(fixtures::metrics()?, pick(Latency::METRICS))),
            reports: Arc::new(MockStore::new(fixtures::reports()?, pick(Latency::RECORDS))),
        })
    }

    /// Remote services over `client`. The backend has no activity table, so
    /// activities stay in a mock store.
    pub fn remote(
        client: Arc<dyn BackendClient>,
        notifier: Arc<dyn Notifier>,
        simulate_latency: bool,
    ) -> Result<Self> {
        let activity_latency = if simulate_latency {
            Latency::ACTIVITIES
        } else {
            Latency::NONE
        };
        Ok(Self {
            contacts: Arc::new(RemoteService::<ContactMapper>::new(client.clone(), notifier.clone())),
            companies: Arc::new(RemoteService::<CompanyMapper>::new(client.clone(), notifier.clone())),
            activities: Arc::new(MockStore::new(fixtures::activities()?, activity_latency)),
            metrics: Arc::new(RemoteService::<MetricMapper>::new(client.clone(), notifier.clone())),
            reports: Arc::new(RemoteService::<ReportMapper>::new(client, notifier)),
        })
    }
}
