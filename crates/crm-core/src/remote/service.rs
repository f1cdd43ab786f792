//! Remote CRUD service over one backend table.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use super::client::{
    BackendClient, BatchResponse, DeletePayload, FetchParams, RecordResult, RecordsPayload,
    PAGE_LIMIT,
};
use super::policy::FailurePolicy;
use crate::error::{CrmError, Result};
use crate::mapper::{fields::system, BackendRecord, RecordMapper};
use crate::notify::Notifier;
use crate::storage::{Entity, RecordId, RecordRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Create,
    Update,
}

impl Mutation {
    fn verb(self) -> &'static str {
        match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
        }
    }

    fn gerund(self) -> &'static str {
        match self {
            Mutation::Create => "creating",
            Mutation::Update => "updating",
        }
    }
}

/// CRUD over a backend table, shaped by mapper `M`.
///
/// Failures are logged and reported to the notifier. Whether they are then
/// absorbed or returned is decided by the mapper's policies.
pub struct RemoteService<M> {
    client: Arc<dyn BackendClient>,
    notifier: Arc<dyn Notifier>,
    _mapper: PhantomData<fn() -> M>,
}

impl<M: RecordMapper> RemoteService<M> {
    pub fn new(client: Arc<dyn BackendClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            _mapper: PhantomData,
        }
    }

    /// Params for a list fetch: field selection, ordering, first page.
    pub fn list_params() -> FetchParams {
        FetchParams::select(M::FIELDS)
            .order_desc(M::ORDER_BY)
            .page(PAGE_LIMIT, 0)
    }

    fn kind() -> String {
        <M::Record as Entity>::KIND.to_lowercase()
    }

    /// Fetch the first page of records. Failures yield an empty list.
    pub async fn fetch_all(&self) -> Vec<M::Record> {
        let response = match self.client.fetch_records(M::TABLE, &Self::list_params()).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(table = M::TABLE, error = %err, "Error fetching {} records", Self::kind());
                return Vec::new();
            }
        };

        if !response.success {
            let message = response.message.unwrap_or_default();
            tracing::error!(table = M::TABLE, "{}", message);
            self.notifier.error(&message);
            return Vec::new();
        }

        response
            .data
            .unwrap_or_default()
            .iter()
            .map(M::from_backend)
            .collect()
    }

    /// Fetch one record. Absent data or any failure yields `None`.
    pub async fn fetch_one(&self, id: RecordId) -> Option<M::Record> {
        let params = FetchParams::select(M::FIELDS);
        match self.client.get_record_by_id(M::TABLE, id, &params).await {
            Ok(response) => response.data.as_ref().map(M::from_backend),
            Err(err) => {
                tracing::error!(table = M::TABLE, id, error = %err, "Error fetching {} with ID {}", Self::kind(), id);
                None
            }
        }
    }

    async fn mutate(&self, op: Mutation, row: BackendRecord) -> Result<Option<M::Record>> {
        let policy = match op {
            Mutation::Create => M::CREATE_FAILURE,
            Mutation::Update => FailurePolicy::Absorb,
        };
        let payload = RecordsPayload { records: vec![row] };
        let call = match op {
            Mutation::Create => self.client.create_record(M::TABLE, &payload).await,
            Mutation::Update => self.client.update_record(M::TABLE, &payload).await,
        };

        let response = match call {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(table = M::TABLE, error = %err, "Error {} {}", op.gerund(), Self::kind());
                return match policy {
                    FailurePolicy::Absorb => Ok(None),
                    FailurePolicy::Raise => {
                        self.notifier.error(&err.to_string());
                        Err(err)
                    }
                };
            }
        };

        self.settle_mutation(op, policy, response)
    }

    fn settle_mutation(
        &self,
        op: Mutation,
        policy: FailurePolicy,
        response: BatchResponse,
    ) -> Result<Option<M::Record>> {
        let raise_or_absorb = |message: String| match policy {
            FailurePolicy::Absorb => Ok(None),
            FailurePolicy::Raise => Err(CrmError::Backend(message)),
        };

        if !response.success {
            let message = response.message.unwrap_or_default();
            tracing::error!(table = M::TABLE, "{}", message);
            self.notifier.error(&message);
            return raise_or_absorb(message);
        }

        let Some(results) = response.results else {
            let message = format!("No results returned for {} {}", op.verb(), Self::kind());
            tracing::error!(table = M::TABLE, "{}", message);
            self.notifier.error(&message);
            return raise_or_absorb(message);
        };

        let (successes, failures): (Vec<RecordResult>, Vec<RecordResult>) =
            results.into_iter().partition(|r| r.success);

        let mut reported = 0;
        if !failures.is_empty() {
            tracing::error!(
                table = M::TABLE,
                failed = failures.len(),
                details = ?failures,
                "Failed to {} {} records",
                op.verb(),
                Self::kind()
            );
            reported = self.report_failures(&failures);
        }

        if let Some(data) = successes.into_iter().find_map(|r| r.data) {
            return Ok(Some(M::from_backend(&data)));
        }

        let message = failures
            .iter()
            .filter_map(|f| f.message.clone())
            .next()
            .unwrap_or_else(|| format!("Failed to {} {}", op.verb(), Self::kind()));
        tracing::error!(table = M::TABLE, "{}", message);
        // Each failure is shown once; a silent outcome still gets one notice.
        if reported == 0 {
            self.notifier.error(&message);
        }
        raise_or_absorb(message)
    }

    /// Notify every field error and record message; returns how many notices
    /// were sent.
    fn report_failures(&self, failures: &[RecordResult]) -> usize {
        let mut sent = 0;
        for failure in failures {
            for error in failure.errors.iter().flatten() {
                self.notifier.error(&error.notice());
                sent += 1;
            }
            if let Some(ref message) = failure.message {
                self.notifier.error(message);
                sent += 1;
            }
        }
        sent
    }

    /// Delete several records in one call. Success is judged by the
    /// mapper's delete policy.
    pub async fn delete_many(&self, ids: &[RecordId]) -> bool {
        let payload = DeletePayload {
            record_ids: ids.to_vec(),
        };
        let response = match self.client.delete_record(M::TABLE, &payload).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(table = M::TABLE, error = %err, "Error deleting {} records", Self::kind());
                return false;
            }
        };

        if !response.success {
            let message = response.message.unwrap_or_default();
            tracing::error!(table = M::TABLE, "{}", message);
            self.notifier.error(&message);
            return false;
        }

        let Some(results) = response.results else {
            return false;
        };

        let (successes, failures): (Vec<RecordResult>, Vec<RecordResult>) =
            results.into_iter().partition(|r| r.success);

        if !failures.is_empty() {
            tracing::error!(
                table = M::TABLE,
                failed = failures.len(),
                details = ?failures,
                "Failed to delete {} records",
                Self::kind()
            );
            for failure in &failures {
                if let Some(ref message) = failure.message {
                    self.notifier.error(message);
                }
            }
        }

        M::DELETE_POLICY.is_satisfied(successes.len(), ids.len())
    }
}

#[async_trait]
impl<M: RecordMapper> RecordRepository<M::Record> for RemoteService<M> {
    async fn get_all(&self) -> Result<Vec<M::Record>> {
        Ok(self.fetch_all().await)
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<M::Record>> {
        Ok(self.fetch_one(id).await)
    }

    async fn create(&self, input: &<M::Record as Entity>::Input) -> Result<Option<M::Record>> {
        self.mutate(Mutation::Create, M::input_to_backend(input)).await
    }

    async fn update(
        &self,
        id: RecordId,
        input: &<M::Record as Entity>::Input,
    ) -> Result<Option<M::Record>> {
        let current = if M::update_needs_current(input) {
            self.fetch_one(id).await
        } else {
            None
        };
        let mut row = M::update_to_backend(input, current.as_ref());
        row.insert(system::ID.to_string(), id.into());
        self.mutate(Mutation::Update, row).await
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        Ok(self.delete_many(&[id]).await)
    }
}
