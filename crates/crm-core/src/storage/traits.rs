//! Repository trait definitions.
//!
//! `RecordRepository` is the interface every page and form talks to. Two
//! families implement it: the in-memory mock stores and the remote CRUD
//! services. They are chosen once, at composition time (see
//! [`crate::repositories`]).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::types::RecordId;
use crate::error::Result;

/// A record kind the repositories can hold.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Mutation input. Every field is optional: `create` overlays it on the
    /// defaults, `update` overlays it on the stored record.
    type Input: Clone + Default + Send + Sync + 'static;

    /// Human-readable kind, used in messages ("Contact", "Company").
    const KIND: &'static str;

    /// Build a new record from input, stamping `now` as its creation time.
    fn build(input: &Self::Input, now: DateTime<Utc>) -> Self;

    /// Overwrite the fields present in `input`. Identity is never touched.
    fn apply(&mut self, input: &Self::Input);
}

/// A record with a stable integer identity.
pub trait Keyed: Entity {
    fn id(&self) -> RecordId;

    /// Assign the identity. Only stores call this, once, at creation.
    fn assign_id(&mut self, id: RecordId);
}

/// CRUD interface over one record kind.
///
/// The two implementation families keep different failure contracts:
///
/// - Mock stores raise `CrmError::NotFound` for unknown ids and always return
///   `Some` from `create`/`update` and `true` from `delete`.
/// - Remote services absorb backend failures: `get_all` returns an empty list,
///   `get_by_id`/`create`/`update` return `None`, `delete` returns `false`.
///   Contact creation is the exception and raises.
#[async_trait]
pub trait RecordRepository<E: Entity>: Send + Sync {
    /// List all records in display order.
    async fn get_all(&self) -> Result<Vec<E>>;

    /// Get a record by ID.
    async fn get_by_id(&self, id: RecordId) -> Result<Option<E>>;

    /// Create a record, assigning its identity and creation time.
    async fn create(&self, input: &E::Input) -> Result<Option<E>>;

    /// Merge the present fields of `input` into an existing record.
    async fn update(&self, id: RecordId, input: &E::Input) -> Result<Option<E>>;

    /// Delete a record.
    async fn delete(&self, id: RecordId) -> Result<bool>;
}
