//! Positional mock store.
//!
//! Records have no identity of their own; the id passed to the repository
//! methods is the record's index. `create` appends.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::traits::{Entity, RecordRepository};
use super::types::{Latency, Operation, RecordId};
use crate::error::{CrmError, Result};

pub struct IndexedStore<E> {
    records: RwLock<Vec<E>>,
    latency: Latency,
}

impl<E: Entity> IndexedStore<E> {
    pub fn new(records: Vec<E>, latency: Latency) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
        }
    }

    fn index(records: &[E], index: RecordId) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|i| *i < records.len())
            .ok_or_else(|| CrmError::NotFound(format!("{} at index {} not found", E::KIND, index)))
    }
}

#[async_trait]
impl<E: Entity> RecordRepository<E> for IndexedStore<E> {
    async fn get_all(&self) -> Result<Vec<E>> {
        self.latency.pause(Operation::GetAll).await;
        Ok(self.records.read().await.clone())
    }

    async fn get_by_id(&self, index: RecordId) -> Result<Option<E>> {
        self.latency.pause(Operation::GetById).await;
        let records = self.records.read().await;
        let i = Self::index(&records, index)?;
        Ok(Some(records[i].clone()))
    }

    async fn create(&self, input: &E::Input) -> Result<Option<E>> {
        self.latency.pause(Operation::Create).await;
        let record = E::build(input, Utc::now());
        self.records.write().await.push(record.clone());
        Ok(Some(record))
    }

    async fn update(&self, index: RecordId, input: &E::Input) -> Result<Option<E>> {
        self.latency.pause(Operation::Update).await;
        let mut records = self.records.write().await;
        let i = Self::index(&records, index)?;
        records[i].apply(input);
        Ok(Some(records[i].clone()))
    }

    async fn delete(&self, index: RecordId) -> Result<bool> {
        self.latency.pause(Operation::Delete).await;
        let mut records = self.records.write().await;
        let i = Self::index(&records, index)?;
        records.remove(i);
        Ok(true)
    }
}
