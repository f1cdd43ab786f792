//! Storage abstractions and the in-memory mock stores.

pub mod fixtures;
mod indexed;
mod mock;
mod traits;
mod types;

pub use indexed::IndexedStore;
pub use mock::MockStore;
pub use traits::{Entity, Keyed, RecordRepository};
pub use types::{Latency, Operation, RecordId};
