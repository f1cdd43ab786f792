//! Shared storage types: identifiers and simulated latency.

use std::time::Duration;

/// Integer record identity, assigned by the store or the backend.
pub type RecordId = i64;

/// Repository operation, used to pick a simulated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
}

/// Artificial per-operation delay applied by the mock stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    /// No delay at all.
    pub const NONE: Latency = Latency::from_millis(0, 0, 0, 0, 0);

    /// Contacts, companies and reports.
    pub const RECORDS: Latency = Latency::from_millis(300, 200, 400, 400, 300);

    /// Activities.
    pub const ACTIVITIES: Latency = Latency::from_millis(200, 150, 300, 300, 250);

    /// Metrics.
    pub const METRICS: Latency = Latency::from_millis(250, 200, 300, 300, 250);

    pub const fn from_millis(
        get_all: u64,
        get_by_id: u64,
        create: u64,
        update: u64,
        delete: u64,
    ) -> Self {
        Self {
            get_all: Duration::from_millis(get_all),
            get_by_id: Duration::from_millis(get_by_id),
            create: Duration::from_millis(create),
            update: Duration::from_millis(update),
            delete: Duration::from_millis(delete),
        }
    }

    /// Delay for one operation.
    pub fn for_operation(&self, op: Operation) -> Duration {
        match op {
            Operation::GetAll => self.get_all,
            Operation::GetById => self.get_by_id,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }

    /// Sleep for the operation's delay. Zero delays return immediately.
    pub async fn pause(&self, op: Operation) {
        let delay = self.for_operation(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::NONE
    }
}
