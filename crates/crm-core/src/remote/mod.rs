//! Remote record services backed by an injected [`BackendClient`].

mod client;
mod policy;
mod service;

pub use client::{
    BackendClient, BatchResponse, DeletePayload, FetchParams, FetchResponse, FieldError,
    FieldName, FieldSelector, OrderBy, PagingInfo, RecordResponse, RecordResult, RecordsPayload,
    SortType, PAGE_LIMIT,
};
pub use policy::{DeletePolicy, FailurePolicy};
pub use service::RemoteService;
