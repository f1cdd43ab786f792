//! In-memory mock store.
//!
//! Stands in for a backend table when none is configured. Each store owns
//! its records; nothing is shared between instances, so every test and every
//! process starts from its own seed. Mutations take the write lock for their
//! whole span, which serializes id allocation.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::traits::{Keyed, RecordRepository};
use super::types::{Latency, Operation, RecordId};
use crate::error::{CrmError, Result};

/// Ordered, fixture-seeded record list with simulated latency.
///
/// New records are prepended so the list reads newest first.
pub struct MockStore<E> {
    records: RwLock<Vec<E>>,
    latency: Latency,
}

impl<E: Keyed> MockStore<E> {
    /// Create a store seeded with `records`, kept in the given order.
    pub fn new(records: Vec<E>, latency: Latency) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
        }
    }

    /// Create a store with no records.
    pub fn empty(latency: Latency) -> Self {
        Self::new(Vec::new(), latency)
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Next identity: one past the largest existing id, or 1 when empty.
    fn next_id(records: &[E]) -> Result<RecordId> {
        match records.iter().map(Keyed::id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                CrmError::IdsExhausted(format!("{} ids are past {}", E::KIND, max))
            }),
        }
    }

    fn position(records: &[E], id: RecordId) -> Result<usize> {
        records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CrmError::not_found(E::KIND, id))
    }
}

#[async_trait]
impl<E: Keyed> RecordRepository<E> for MockStore<E> {
    async fn get_all(&self) -> Result<Vec<E>> {
        self.latency.pause(Operation::GetAll).await;
        Ok(self.records.read().await.clone())
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<E>> {
        self.latency.pause(Operation::GetById).await;
        let records = self.records.read().await;
        let index = Self::position(&records, id)?;
        Ok(Some(records[index].clone()))
    }

    async fn create(&self, input: &E::Input) -> Result<Option<E>> {
        self.latency.pause(Operation::Create).await;
        let mut records = self.records.write().await;
        let id = Self::next_id(&records)?;
        let mut record = E::build(input, Utc::now());
        record.assign_id(id);
        records.insert(0, record.clone());
        tracing::debug!(kind = E::KIND, id, "created mock record");
        Ok(Some(record))
    }

    async fn update(&self, id: RecordId, input: &E::Input) -> Result<Option<E>> {
        self.latency.pause(Operation::Update).await;
        let mut records = self.records.write().await;
        let index = Self::position(&records, id)?;
        let record = &mut records[index];
        record.apply(input);
        tracing::debug!(kind = E::KIND, id, "updated mock record");
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        self.latency.pause(Operation::Delete).await;
        let mut records = self.records.write().await;
        let index = Self::position(&records, id)?;
        records.remove(index);
        tracing::debug!(kind = E::KIND, id, "deleted mock record");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, ActivityInput, ActivityType};
    use crate::storage::Entity;

    fn input(description: &str) -> ActivityInput {
        ActivityInput {
            kind: Some(ActivityType::Meeting),
            description: Some(description.to_string()),
            contact_id: Some(1),
        }
    }

    #[tokio::test]
    async fn test_empty_store_starts_at_one() {
        let store: MockStore<Activity> = MockStore::empty(Latency::NONE);
        let created = store.create(&input("Kickoff meeting")).await.unwrap().unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_next_id_follows_max_not_len() {
        let store: MockStore<Activity> = MockStore::empty(Latency::NONE);
        let first = store.create(&input("First entry here")).await.unwrap().unwrap();
        let second = store.create(&input("Second entry here")).await.unwrap().unwrap();
        store.delete(first.id).await.unwrap();
        let third = store.create(&input("Third entry here")).await.unwrap().unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store: MockStore<Activity> = MockStore::empty(Latency::NONE);
        let err = store.get_by_id(9).await.unwrap_err();
        assert!(matches!(err, CrmError::NotFound(_)));
        assert!(matches!(
            store.update(9, &ActivityInput::default()).await,
            Err(CrmError::NotFound(_))
        ));
        assert!(matches!(store.delete(9).await, Err(CrmError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let store: MockStore<Activity> = MockStore::empty(Latency::ACTIVITIES);
        let started = tokio::time::Instant::now();
        store.get_all().await.unwrap();
        assert!(started.elapsed() >= Latency::ACTIVITIES.get_all);
    }

    #[tokio::test]
    async fn test_create_fails_when_ids_run_out() {
        let mut last = Activity::build(&input("Largest possible id"), Utc::now());
        last.assign_id(RecordId::MAX);
        let store = MockStore::new(vec![last], Latency::NONE);

        let err = store.create(&input("One too many")).await.unwrap_err();
        assert!(matches!(err, CrmError::IdsExhausted(_)));
        assert_eq!(store.len().await, 1);
    }
}
