use crate::support::task;
use dashterm::api::{ApiError, Task};
use dashterm::fetch::RemoteResource;
use dashterm::store::{MutationKind, TaskStore};
use dashterm::ui::core::{Action, TaskManager, WidgetKind};

#[test]
fn test_widget_focus_order() {
    let mut kind = WidgetKind::default();
    assert_eq!(kind, WidgetKind::Tasks);
    for expected in [WidgetKind::Notes, WidgetKind::Weather, WidgetKind::News, WidgetKind::Tasks] {
        kind = kind.next();
        assert_eq!(kind, expected);
    }
    for kind in WidgetKind::ALL {
        assert_eq!(kind.next().previous(), kind);
    }
}

#[test]
fn test_widget_titles() {
    assert_eq!(WidgetKind::Tasks.title(), "Tasks");
    assert_eq!(WidgetKind::News.title(), "News");
}

fn loaded(generation: u64, result: Result<Vec<Task>, ApiError>) -> Action {
    Action::TasksLoaded { generation, result }
}

#[tokio::test]
async fn test_spawn_fetch_reports_generation() {
    let (mut manager, mut rx) = TaskManager::new();
    let mut resource: RemoteResource<Vec<Task>> = RemoteResource::new("/api/tasks");

    let job = manager.spawn_fetch(&mut resource, || async { Ok(vec![task(1, "a")]) }, loaded);
    assert!(job.is_some());
    assert!(resource.is_in_flight());

    match rx.recv().await {
        Some(Action::TasksLoaded { generation, result }) => {
            assert_eq!(generation, 1);
            assert!(resource.resolve(generation, result));
        }
        other => panic!("expected TasksLoaded, got {other:?}"),
    }
    assert_eq!(resource.data().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_spawn_fetch_skips_in_flight_resource() {
    let (mut manager, _rx) = TaskManager::new();
    let mut resource: RemoteResource<Vec<Task>> = RemoteResource::new("/api/tasks");

    assert!(manager.spawn_fetch(&mut resource, || async { Ok(Vec::new()) }, loaded).is_some());
    assert!(manager.spawn_fetch(&mut resource, || async { Ok(Vec::new()) }, loaded).is_none());
    assert_eq!(manager.job_count(), 1);
}

#[tokio::test]
async fn test_spawn_mutation_reports_back() {
    let (mut manager, mut rx) = TaskManager::new();
    let mut store = TaskStore::new();
    let generation = store.load().unwrap();
    store.resolve_load(generation, Ok(vec![task(1, "a")]));
    let mutation = store.complete(&task(1, "a").id).unwrap();

    manager.spawn_mutation(mutation.clone(), async { Ok(()) });
    match rx.recv().await {
        Some(Action::MutationFinished { mutation: finished, result }) => {
            assert_eq!(finished, mutation);
            assert_eq!(finished.kind, MutationKind::Complete);
            assert!(result.is_ok());
        }
        other => panic!("expected MutationFinished, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cleanup_and_cancel() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_request("quick".to_string(), async { Ok(()) }, Action::TaskCreated);
    rx.recv().await.unwrap();
    tokio::task::yield_now().await;

    manager.spawn_request(
        "slow".to_string(),
        async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            Ok(())
        },
        Action::TaskCreated,
    );

    let mut finished = manager.cleanup_finished_jobs();
    // The quick job may need one more poll to be marked finished
    for _ in 0..10 {
        if !finished.is_empty() {
            break;
        }
        tokio::task::yield_now().await;
        finished = manager.cleanup_finished_jobs();
    }
    assert_eq!(finished, vec!["quick".to_string()]);
    assert_eq!(manager.job_count(), 1);

    manager.cancel_all_jobs();
    assert_eq!(manager.job_count(), 0);
}
