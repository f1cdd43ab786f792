use chrono::Utc;

use crm_core::model::{
    Company, CompanyInput, Contact, ContactInput, Industry, MetricInput, ReportInput, Status,
    SubscriptionPlan, Trend,
};
use crm_core::storage::{fixtures, Latency, MockStore, RecordRepository};
use crm_core::{CrmError, Repositories};

fn contact_input(first: &str, last: &str) -> ContactInput {
    ContactInput {
        first_name: Some(first.into()),
        last_name: Some(last.into()),
        email: Some(format!("{}@example.com", first.to_lowercase())),
        company: Some("Initech".into()),
        role: Some("Analyst".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_then_get_by_id() {
    let store: MockStore<Contact> = MockStore::empty(Latency::NONE);
    let before = Utc::now();
    let created = store
        .create(&contact_input("Peter", "Gibbons"))
        .await
        .expect("create should succeed")
        .expect("mock create returns the record");
    assert_eq!(created.id, 1);
    assert!(created.created_at >= before);

    let fetched = store
        .get_by_id(created.id)
        .await
        .expect("get should succeed")
        .expect("record should exist");
    assert_eq!(fetched, created);
    assert_eq!(fetched.full_name(), "Peter Gibbons");
    assert_eq!(fetched.status, Status::Trial);
}

#[tokio::test]
async fn test_update_preserves_absent_fields_and_id() {
    let store: MockStore<Contact> = MockStore::empty(Latency::NONE);
    let created = store
        .create(&contact_input("Samir", "Nagheenanajar"))
        .await
        .unwrap()
        .unwrap();

    let updated = store
        .update(
            created.id,
            &ContactInput {
                role: Some("Engineer".into()),
                mrr: Some("0".into()),
                ..Default::default()
            },
        )
        .await
        .expect("update should succeed")
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.role, "Engineer");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.mrr, 0.0);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let store: MockStore<Contact> = MockStore::empty(Latency::NONE);
    let created = store.create(&contact_input("Michael", "Bolton")).await.unwrap().unwrap();
    assert!(store.delete(created.id).await.expect("delete should succeed"));

    let err = store.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, CrmError::NotFound(_)));
    assert_eq!(err.to_string(), "Not found: Contact with ID 1 not found");
}

#[tokio::test]
async fn test_newest_first_after_two_creates() {
    let store: MockStore<Contact> = MockStore::empty(Latency::NONE);
    store.create(&contact_input("First", "Person")).await.unwrap();
    store.create(&contact_input("Second", "Person")).await.unwrap();

    let all = store.get_all().await.unwrap();
    assert_eq!(all[0].first_name, "Second");
    assert_eq!(all[0].id, 2);
    assert_eq!(all[1].id, 1);
}

#[tokio::test]
async fn test_company_create_coerces_text_numbers() {
    let store: MockStore<Company> = MockStore::new(fixtures::companies().unwrap(), Latency::NONE);
    let max_id = store.get_all().await.unwrap().iter().map(|c| c.id).max().unwrap();

    let company = store
        .create(&CompanyInput {
            name: Some("Vandelay Industries".into()),
            industry: Some(Industry::Manufacturing),
            employees: Some("50".into()),
            subscription_plan: Some(SubscriptionPlan::Starter),
            mrr: Some("1000".into()),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(company.id, max_id + 1);
    assert_eq!(company.employees, 50);
    assert_eq!(company.mrr, 1000.0);
    assert_eq!(company.status, Status::Trial);
}

#[tokio::test]
async fn test_composed_mock_repositories() {
    let repos = Repositories::mock(false).expect("fixtures should load");

    let metrics = repos.metrics.get_all().await.unwrap();
    assert!(metrics.iter().all(|m| m.id.is_none()));

    let appended = repos
        .metrics
        .create(&MetricInput {
            label: Some("Open Deals".into()),
            value: Some(12u32.into()),
            change: Some(1.5.into()),
            trend: Some(Trend::Up),
        })
        .await
        .unwrap()
        .unwrap();
    let all = repos.metrics.get_all().await.unwrap();
    assert_eq!(all.last(), Some(&appended));
    let last_index = (all.len() - 1) as i64;
    assert_eq!(repos.metrics.get_by_id(last_index).await.unwrap(), Some(appended));

    let report = repos
        .reports
        .create(&ReportInput {
            name: Some("Churn review".into()),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert!(report.created_on.is_some());
    assert_eq!(repos.reports.get_all().await.unwrap()[0].id, report.id);
}
