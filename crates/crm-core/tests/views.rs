use std::time::Duration;

use async_trait::async_trait;

use crm_core::model::{Activity, ActivityInput, Contact, ContactInput};
use crm_core::storage::{Latency, MockStore};
use crm_core::views::{Dashboard, ListPage, LoadOutcome, DASHBOARD_LOAD_ERROR, RECENT_ACTIVITY_LIMIT};
use crm_core::{CrmError, RecordId, RecordRepository, Repositories, Result};

fn contact(first: &str) -> ContactInput {
    ContactInput {
        first_name: Some(first.into()),
        last_name: Some("Tester".into()),
        ..Default::default()
    }
}

/// Activity repository whose reads always fail.
struct Broken;

#[async_trait]
impl RecordRepository<Activity> for Broken {
    async fn get_all(&self) -> Result<Vec<Activity>> {
        Err(CrmError::Transport("socket closed".into()))
    }

    async fn get_by_id(&self, _id: RecordId) -> Result<Option<Activity>> {
        Err(CrmError::Transport("socket closed".into()))
    }

    async fn create(&self, _input: &ActivityInput) -> Result<Option<Activity>> {
        Err(CrmError::Transport("socket closed".into()))
    }

    async fn update(&self, _id: RecordId, _input: &ActivityInput) -> Result<Option<Activity>> {
        Err(CrmError::Transport("socket closed".into()))
    }

    async fn delete(&self, _id: RecordId) -> Result<bool> {
        Err(CrmError::Transport("socket closed".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_load_after_unmount_is_discarded() {
    let store: MockStore<Contact> = MockStore::empty(Latency::RECORDS);
    store.create(&contact("Late")).await.unwrap();
    let page = ListPage::new("contacts");

    let (outcome, ()) = tokio::join!(page.load(&store), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        page.unmount();
    });

    assert_eq!(outcome, LoadOutcome::Discarded);
    assert!(page.items().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stale_generation_is_discarded() {
    let slow: MockStore<Contact> = MockStore::empty(Latency::RECORDS);
    slow.create(&contact("Slow")).await.unwrap();
    let fast: MockStore<Contact> = MockStore::empty(Latency::NONE);
    fast.create(&contact("Fast")).await.unwrap();
    let page = ListPage::new("contacts");

    let (first, second) = tokio::join!(page.load(&slow), page.load(&fast));

    assert_eq!(first, LoadOutcome::Discarded);
    assert_eq!(second, LoadOutcome::Applied);
    assert_eq!(page.items()[0].first_name, "Fast");
    assert!(!page.is_loading());
}

#[tokio::test]
async fn test_failed_load_sets_message() {
    let page: ListPage<Activity> = ListPage::new("activities");
    assert_eq!(page.load(&Broken).await, LoadOutcome::Applied);
    assert_eq!(page.error().as_deref(), Some("Failed to load activities"));
    assert!(!page.is_loading());
}

#[tokio::test]
async fn test_remount_accepts_loads_again() {
    let store: MockStore<Contact> = MockStore::empty(Latency::NONE);
    store.create(&contact("Again")).await.unwrap();
    let page = ListPage::new("contacts");
    page.unmount();
    assert_eq!(page.load(&store).await, LoadOutcome::Discarded);
    page.mount();
    assert_eq!(page.load(&store).await, LoadOutcome::Applied);
    assert_eq!(page.items().len(), 1);
}

#[tokio::test]
async fn test_dashboard_shows_five_newest_activities() {
    let repos = Repositories::mock(false).unwrap();
    let dashboard = Dashboard::load(repos.metrics.as_ref(), repos.activities.as_ref()).await;

    assert!(dashboard.error.is_none());
    assert_eq!(dashboard.metrics.len(), 4);
    assert_eq!(dashboard.recent_activities.len(), RECENT_ACTIVITY_LIMIT);
    let stamps: Vec<_> = dashboard.recent_activities.iter().map(|a| a.timestamp).collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_dashboard_failure_message() {
    let repos = Repositories::mock(false).unwrap();
    let dashboard = Dashboard::load(repos.metrics.as_ref(), &Broken).await;

    assert_eq!(dashboard.error.as_deref(), Some(DASHBOARD_LOAD_ERROR));
    assert!(dashboard.metrics.is_empty());
    assert!(dashboard.recent_activities.is_empty());
}
