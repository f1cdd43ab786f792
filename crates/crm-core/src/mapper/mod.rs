//! Mapping between UI records and the backend schema.
//!
//! A mapper is a set of pure, total functions plus the per-table constants
//! the remote service needs: table name, field selection, ordering and the
//! failure policies for that table.

mod company;
mod contact;
pub mod fields;
mod metric;
pub mod read;
mod report;

use serde_json::{Map, Value};

use crate::remote::{DeletePolicy, FailurePolicy};
use crate::storage::Entity;

pub use company::CompanyMapper;
pub use contact::ContactMapper;
pub use metric::MetricMapper;
pub use report::ReportMapper;

/// One row as the backend sends and receives it.
pub type BackendRecord = Map<String, Value>;

/// Field mapping and table policy for one record kind.
pub trait RecordMapper: Send + Sync + 'static {
    type Record: Entity;

    /// Backend table name.
    const TABLE: &'static str;

    /// Fields requested on every fetch.
    const FIELDS: &'static [&'static str];

    /// Field the list is sorted on, descending.
    const ORDER_BY: &'static str;

    /// How a multi-id delete is judged.
    const DELETE_POLICY: DeletePolicy;

    /// Whether a failed create is absorbed or raised.
    const CREATE_FAILURE: FailurePolicy = FailurePolicy::Absorb;

    /// Full record to backend fields.
    fn to_backend(record: &Self::Record) -> BackendRecord;

    /// Mutation payload: only the fields present in `input`.
    fn input_to_backend(input: &<Self::Record as Entity>::Input) -> BackendRecord;

    /// Backend row to record. Missing fields take defaults.
    fn from_backend(row: &BackendRecord) -> Self::Record;

    /// Whether [`RecordMapper::update_to_backend`] needs the stored record
    /// to build a complete payload for `input`.
    fn update_needs_current(_input: &<Self::Record as Entity>::Input) -> bool {
        false
    }

    /// Update payload. Fields derived from several inputs are rebuilt from
    /// `current` when the input only carries part of them.
    fn update_to_backend(
        input: &<Self::Record as Entity>::Input,
        _current: Option<&Self::Record>,
    ) -> BackendRecord {
        Self::input_to_backend(input)
    }
}

/// Insert `value` under `key` when present.
pub(crate) fn put<V: Into<Value>>(row: &mut BackendRecord, key: &str, value: Option<V>) {
    if let Some(value) = value {
        row.insert(key.to_string(), value.into());
    }
}
