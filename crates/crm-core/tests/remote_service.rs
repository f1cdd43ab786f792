use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crm_core::forms::{CompanyDraft, Form};
use crm_core::mapper::{BackendRecord, CompanyMapper, ContactMapper, ReportMapper};
use crm_core::model::{CompanyInput, ContactInput, Status};
use crm_core::notify::{NoticeLevel, NoticeLog};
use crm_core::remote::{
    BackendClient, BatchResponse, DeletePayload, FetchParams, FetchResponse, RecordResponse,
    RecordResult, RecordsPayload, RemoteService,
};
use crm_core::{CrmError, RecordId, RecordRepository, Result};

#[derive(Debug, Clone)]
struct Call {
    op: &'static str,
    table: String,
    body: Value,
}

/// Backend client that replays canned responses and records every call.
#[derive(Default)]
struct ScriptedClient {
    fetch: Mutex<Option<FetchResponse>>,
    record: Mutex<Option<RecordResponse>>,
    batch: Mutex<Option<BatchResponse>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedClient {
    fn with_fetch(response: FetchResponse) -> Arc<Self> {
        let client = Self::default();
        *client.fetch.lock().unwrap() = Some(response);
        Arc::new(client)
    }

    fn with_record(response: RecordResponse) -> Arc<Self> {
        let client = Self::default();
        *client.record.lock().unwrap() = Some(response);
        Arc::new(client)
    }

    fn with_batch(response: BatchResponse) -> Arc<Self> {
        let client = Self::default();
        *client.batch.lock().unwrap() = Some(response);
        Arc::new(client)
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, op: &'static str, table: &str, body: Value) {
        self.calls.lock().unwrap().push(Call {
            op,
            table: table.to_string(),
            body,
        });
    }

    fn scripted<T: Clone>(slot: &Mutex<Option<T>>) -> Result<T> {
        slot.lock()
            .unwrap()
            .clone()
            .ok_or_else(|| CrmError::Transport("no response scripted".into()))
    }
}

#[async_trait]
impl BackendClient for ScriptedClient {
    async fn fetch_records(&self, table: &str, params: &FetchParams) -> Result<FetchResponse> {
        self.record_call("fetch", table, serde_json::to_value(params)?);
        Self::scripted(&self.fetch)
    }

    async fn get_record_by_id(
        &self,
        table: &str,
        id: RecordId,
        params: &FetchParams,
    ) -> Result<RecordResponse> {
        self.record_call("get", table, json!({"id": id, "params": params}));
        Self::scripted(&self.record)
    }

    async fn create_record(&self, table: &str, payload: &RecordsPayload) -> Result<BatchResponse> {
        self.record_call("create", table, serde_json::to_value(payload)?);
        Self::scripted(&self.batch)
    }

    async fn update_record(&self, table: &str, payload: &RecordsPayload) -> Result<BatchResponse> {
        self.record_call("update", table, serde_json::to_value(payload)?);
        Self::scripted(&self.batch)
    }

    async fn delete_record(&self, table: &str, payload: &DeletePayload) -> Result<BatchResponse> {
        self.record_call("delete", table, serde_json::to_value(payload)?);
        Self::scripted(&self.batch)
    }
}

fn row(value: Value) -> BackendRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

fn ok(data: Value) -> RecordResult {
    RecordResult {
        success: true,
        data: Some(row(data)),
        ..Default::default()
    }
}

fn failed(message: Option<&str>, errors: Value) -> RecordResult {
    serde_json::from_value(json!({
        "success": false,
        "message": message,
        "errors": errors
    }))
    .expect("valid failure result")
}

fn batch(results: Vec<RecordResult>) -> BatchResponse {
    BatchResponse {
        success: true,
        message: None,
        results: Some(results),
    }
}

fn service<M: crm_core::mapper::RecordMapper>(
    client: &Arc<ScriptedClient>,
    log: &Arc<NoticeLog>,
) -> RemoteService<M> {
    RemoteService::new(client.clone(), log.clone())
}

#[tokio::test]
async fn test_get_all_sends_selection_ordering_and_paging() {
    let client = ScriptedClient::with_fetch(FetchResponse {
        success: true,
        message: None,
        data: Some(vec![row(json!({
            "Id": 3,
            "first_name_c": "Sarah",
            "last_name_c": "Johnson",
            "status_c": "active",
            "mrr_c": "2500",
            "CreatedOn": "2024-01-15T10:30:00Z"
        }))]),
    });
    let log = Arc::new(NoticeLog::new());
    let contacts = service::<ContactMapper>(&client, &log);

    let all = contacts.get_all().await.expect("remote get_all never raises");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].full_name(), "Sarah Johnson");
    assert_eq!(all[0].status, Status::Active);
    assert_eq!(all[0].mrr, 2500.0);

    let calls = client.calls();
    assert_eq!(calls[0].op, "fetch");
    assert_eq!(calls[0].table, "contact_c");
    assert_eq!(
        calls[0].body["orderBy"],
        json!([{"fieldName": "CreatedOn", "sorttype": "DESC"}])
    );
    assert_eq!(calls[0].body["pagingInfo"], json!({"limit": 100, "offset": 0}));
    assert!(calls[0].body["fields"]
        .as_array()
        .unwrap()
        .contains(&json!({"field": {"Name": "parent_address_c"}})));
}

#[tokio::test]
async fn test_reports_order_by_modified_on() {
    let client = ScriptedClient::with_fetch(FetchResponse {
        success: true,
        ..Default::default()
    });
    let log = Arc::new(NoticeLog::new());
    let reports = service::<ReportMapper>(&client, &log);

    assert!(reports.get_all().await.unwrap().is_empty());
    assert_eq!(client.calls()[0].body["orderBy"][0]["fieldName"], "ModifiedOn");
}

#[tokio::test]
async fn test_unsuccessful_fetch_notifies_and_returns_empty() {
    let client = ScriptedClient::with_fetch(FetchResponse {
        success: false,
        message: Some("Table not found".into()),
        data: None,
    });
    let log = Arc::new(NoticeLog::new());
    let companies = service::<CompanyMapper>(&client, &log);

    assert!(companies.get_all().await.unwrap().is_empty());
    assert_eq!(log.errors(), vec!["Table not found"]);
}

#[tokio::test]
async fn test_get_by_id_without_data_is_none() {
    let client = ScriptedClient::with_record(RecordResponse { data: None });
    let log = Arc::new(NoticeLog::new());
    let companies = service::<CompanyMapper>(&client, &log);

    assert_eq!(companies.get_by_id(77).await.unwrap(), None);
    let call = &client.calls()[0];
    assert_eq!(call.body["id"], 77);
    assert!(call.body["params"].get("orderBy").is_none());
}

#[tokio::test]
async fn test_create_with_single_field_error() {
    let client = ScriptedClient::with_batch(batch(vec![failed(
        None,
        json!([{"fieldLabel": "Name", "message": "required"}]),
    )]));
    let log = Arc::new(NoticeLog::new());
    let companies = service::<CompanyMapper>(&client, &log);

    let created = companies
        .create(&CompanyInput::default())
        .await
        .expect("company create absorbs failures");
    assert_eq!(created, None);
    assert_eq!(log.notices().len(), 1);
    assert_eq!(log.errors(), vec!["Name: required"]);
}

#[tokio::test]
async fn test_every_field_error_and_message_is_reported() {
    let client = ScriptedClient::with_batch(batch(vec![
        failed(
            Some("Record rejected"),
            json!([
                {"fieldLabel": "Website", "message": "invalid"},
                {"fieldLabel": "MRR", "message": "must be positive"}
            ]),
        ),
        ok(json!({"Id": 12, "Name": "Acme", "employees_c": 10})),
    ]));
    let log = Arc::new(NoticeLog::new());
    let companies = service::<CompanyMapper>(&client, &log);

    let created = companies.create(&CompanyInput::default()).await.unwrap();
    assert_eq!(created.map(|c| (c.id, c.employees)), Some((12, 10)));
    assert_eq!(
        log.errors(),
        vec!["Website: invalid", "MRR: must be positive", "Record rejected"]
    );
}

#[tokio::test]
async fn test_update_payload_carries_id() {
    let client = ScriptedClient::with_batch(batch(vec![ok(json!({
        "Id": 5,
        "Name": "Globex",
        "status_c": "churned"
    }))]));
    let log = Arc::new(NoticeLog::new());
    let companies = service::<CompanyMapper>(&client, &log);

    let updated = companies
        .update(
            5,
            &CompanyInput {
                status: Some(Status::Churned),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, Status::Churned);

    let call = &client.calls()[0];
    assert_eq!(call.op, "update");
    assert_eq!(call.body, json!({"records": [{"Id": 5, "status_c": "churned"}]}));
}

#[tokio::test]
async fn test_contact_rename_keeps_display_name_current() {
    let client = ScriptedClient::with_batch(batch(vec![ok(json!({
        "Id": 2,
        "first_name_c": "Mike",
        "last_name_c": "Chen"
    }))]));
    *client.record.lock().unwrap() = Some(RecordResponse {
        data: Some(row(json!({
            "Id": 2,
            "Name": "Michael Chen",
            "first_name_c": "Michael",
            "last_name_c": "Chen"
        }))),
    });
    let log = Arc::new(NoticeLog::new());
    let contacts = service::<ContactMapper>(&client, &log);

    let input = ContactInput {
        first_name: Some("Mike".into()),
        ..Default::default()
    };
    let updated = contacts.update(2, &input).await.unwrap().unwrap();
    assert_eq!(updated.full_name(), "Mike Chen");

    let calls = client.calls();
    assert_eq!(calls.iter().map(|c| c.op).collect::<Vec<_>>(), vec!["get", "update"]);
    assert_eq!(
        calls[1].body,
        json!({"records": [{
            "Id": 2,
            "Name": "Mike Chen",
            "name1_c": "Mike Chen",
            "first_name_c": "Mike"
        }]})
    );
}

#[tokio::test]
async fn test_partial_delete_depends_on_table_policy() {
    let response = batch(vec![
        RecordResult {
            success: true,
            ..Default::default()
        },
        failed(Some("Record is locked"), json!(null)),
    ]);

    let log = Arc::new(NoticeLog::new());
    let client = ScriptedClient::with_batch(response.clone());
    let contacts = service::<ContactMapper>(&client, &log);
    assert!(contacts.delete_many(&[1, 2]).await);
    assert_eq!(client.calls()[0].body, json!({"RecordIds": [1, 2]}));

    let client = ScriptedClient::with_batch(response);
    let companies = service::<CompanyMapper>(&client, &log);
    assert!(!companies.delete_many(&[1, 2]).await);

    assert_eq!(log.errors(), vec!["Record is locked", "Record is locked"]);
}

#[tokio::test]
async fn test_contact_create_raises_when_nothing_succeeds() {
    let client = ScriptedClient::with_batch(batch(vec![failed(
        Some("Duplicate email"),
        json!([]),
    )]));
    let log = Arc::new(NoticeLog::new());
    let contacts = service::<ContactMapper>(&client, &log);

    let err = contacts.create(&ContactInput::default()).await.unwrap_err();
    assert!(matches!(err, CrmError::Backend(ref m) if m == "Duplicate email"));
    assert_eq!(log.errors(), vec!["Duplicate email"]);
}

#[tokio::test]
async fn test_contact_create_with_no_results_is_notified() {
    let log = Arc::new(NoticeLog::new());
    let client = ScriptedClient::with_batch(batch(vec![]));
    let contacts = service::<ContactMapper>(&client, &log);

    let err = contacts.create(&ContactInput::default()).await.unwrap_err();
    assert!(matches!(err, CrmError::Backend(ref m) if m == "Failed to create contact"));
    assert_eq!(log.errors(), vec!["Failed to create contact"]);
}

#[tokio::test]
async fn test_contact_create_with_missing_results_is_notified() {
    let log = Arc::new(NoticeLog::new());
    let client = ScriptedClient::with_batch(BatchResponse {
        success: true,
        message: None,
        results: None,
    });
    let contacts = service::<ContactMapper>(&client, &log);

    let err = contacts.create(&ContactInput::default()).await.unwrap_err();
    assert!(matches!(err, CrmError::Backend(_)));
    assert_eq!(log.errors(), vec!["No results returned for create contact"]);
}

#[tokio::test]
async fn test_absorbed_empty_batch_is_notified_once() {
    let log = Arc::new(NoticeLog::new());
    let client = ScriptedClient::with_batch(batch(vec![failed(None, json!([]))]));
    let companies = service::<CompanyMapper>(&client, &log);

    assert_eq!(companies.create(&CompanyInput::default()).await.unwrap(), None);
    assert_eq!(log.errors(), vec!["Failed to create company"]);
}

#[tokio::test]
async fn test_unsuccessful_batch_raises_only_for_contact_create() {
    let response = BatchResponse {
        success: false,
        message: Some("Quota exceeded".into()),
        results: None,
    };
    let log = Arc::new(NoticeLog::new());

    let client = ScriptedClient::with_batch(response.clone());
    let contacts = service::<ContactMapper>(&client, &log);
    assert!(matches!(
        contacts.create(&ContactInput::default()).await,
        Err(CrmError::Backend(_))
    ));
    assert_eq!(contacts.update(1, &ContactInput::default()).await.unwrap(), None);

    let client = ScriptedClient::with_batch(response);
    let companies = service::<CompanyMapper>(&client, &log);
    assert_eq!(companies.create(&CompanyInput::default()).await.unwrap(), None);

    assert_eq!(log.errors().len(), 3);
}

#[tokio::test]
async fn test_form_over_remote_service_reports_absorbed_failure_once() {
    let client = ScriptedClient::with_batch(batch(vec![failed(
        None,
        json!([{"fieldLabel": "Name", "message": "required"}]),
    )]));
    let log = Arc::new(NoticeLog::new());
    let companies = service::<CompanyMapper>(&client, &log);

    let form = Form::create(CompanyDraft {
        name: "Acme".into(),
        industry: "Technology".into(),
        employees: "10".into(),
        subscription_plan: "Starter".into(),
        mrr: "0".into(),
        ..Default::default()
    });
    let saved = form.submit(&companies, log.as_ref()).await.unwrap();
    assert_eq!(saved, None);
    assert_eq!(log.messages(NoticeLevel::Success), Vec::<String>::new());
    assert_eq!(log.errors(), vec!["Name: required"]);
    assert!(!form.is_submitting());
}
