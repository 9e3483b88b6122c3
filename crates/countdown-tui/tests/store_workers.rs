use async_trait::async_trait;
use countdown_core::{CountdownError, CountdownResult};
use countdown_domain::{CountdownEntry, PageState};
use countdown_persistence::RemoteStore;
use countdown_tui::state::{spawn_load, spawn_save_worker, StateManager};
use countdown_tui::Event;
use mockall::mock;
use std::sync::Arc;
use tokio::sync::mpsc;

mock! {
    pub Store {}

    #[async_trait]
    impl RemoteStore for Store {
        async fn fetch_all(&self) -> CountdownResult<Vec<CountdownEntry>>;
        async fn replace_all(&self, entries: &[CountdownEntry]) -> CountdownResult<()>;
        fn endpoint(&self) -> &str;
    }
}

#[tokio::test]
async fn test_load_reports_entries() {
    let mut store = MockStore::new();
    store
        .expect_fetch_all()
        .times(1)
        .returning(|| Ok(vec![CountdownEntry::new("Launch", "2099-01-01")]));

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    spawn_load(Arc::new(store), events_tx).await.unwrap();

    match events_rx.recv().await {
        Some(Event::Loaded(Ok(entries))) => {
            assert_eq!(entries, vec![CountdownEntry::new("Launch", "2099-01-01")]);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_load_reports_failure() {
    let mut store = MockStore::new();
    store
        .expect_fetch_all()
        .times(1)
        .returning(|| Err(CountdownError::Connection("HTTP 500".to_string())));

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    spawn_load(Arc::new(store), events_tx).await.unwrap();

    assert!(matches!(
        events_rx.recv().await,
        Some(Event::Loaded(Err(CountdownError::Connection(_))))
    ));
}

#[tokio::test]
async fn test_save_worker_sends_every_queued_list() {
    let mut store = MockStore::new();
    store
        .expect_replace_all()
        .withf(|entries| entries.len() == 1)
        .times(1)
        .returning(|_| Ok(()));
    store
        .expect_replace_all()
        .withf(|entries| entries.is_empty())
        .times(1)
        .returning(|_| Ok(()));

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let (mut manager, save_rx) = StateManager::new();
    let worker = spawn_save_worker(Arc::new(store), save_rx, events_tx);

    manager.queue_save(&PageState::Ready(vec![CountdownEntry::new("Launch", "2099-01-01")]));
    manager.queue_save(&PageState::Ready(vec![]));
    manager.close();

    worker.await.unwrap();
    assert!(events_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_save_failure_is_reported() {
    let mut store = MockStore::new();
    store
        .expect_replace_all()
        .times(1)
        .returning(|_| Err(CountdownError::Connection("connection refused".to_string())));

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let (mut manager, save_rx) = StateManager::new();
    let worker = spawn_save_worker(Arc::new(store), save_rx, events_tx);

    manager.queue_save(&PageState::Ready(vec![]));
    drop(manager);
    worker.await.unwrap();

    match events_rx.recv().await {
        Some(Event::SaveFailed(reason)) => assert!(reason.contains("connection refused")),
        other => panic!("unexpected event: {:?}", other),
    }
}
