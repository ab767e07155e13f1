use crate::support::{server_error, MockApi};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dashterm::api::{DashboardApi, TaskId};
use dashterm::config::Config;
use dashterm::constants::{ERROR_TASK_COMPLETION_FAILED, ERROR_TASK_DELETE_FAILED, SUCCESS_TASK_CREATED};
use dashterm::ui::core::{Action, WidgetKind};
use dashterm::ui::{AppComponent, Theme};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(api: &Arc<MockApi>, config: &Config) -> AppComponent {
    let api: Arc<dyn DashboardApi> = api.clone();
    AppComponent::new(api, config)
}

/// Apply the next `count` results reported by background jobs
async fn settle(app: &mut AppComponent, count: usize) {
    for _ in 0..count {
        let action = app.next_background_action().await.expect("job channel closed");
        app.handle_app_action(action).await;
    }
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    let action = app.handle_key_event(key(code));
    app.handle_app_action(action).await;
}

async fn mounted(api: &Arc<MockApi>) -> AppComponent {
    let mut app = app_with(api, &Config::default());
    app.mount();
    settle(&mut app, 4).await;
    app
}

#[tokio::test]
async fn test_mount_starts_every_widget_loading() {
    let api = Arc::new(MockApi::healthy());
    let mut app = app_with(&api, &Config::default());
    app.mount();

    assert!(app.tasks().store().state().is_loading());
    assert!(app.notes().resource().state().is_loading());
    assert!(app.weather().resource().state().is_loading());
    assert!(app.news().resource().state().is_loading());
    assert_eq!(app.active_job_count(), 4);
}

#[tokio::test]
async fn test_all_widgets_ready_after_fetches() {
    let api = Arc::new(MockApi::healthy());
    let app = mounted(&api).await;

    assert_eq!(app.tasks().store().tasks().len(), 2);
    assert!(app.notes().resource().state().is_ready());
    assert!(app.weather().resource().state().is_ready());
    assert!(app.news().resource().state().is_ready());
}

#[tokio::test]
async fn test_news_failure_is_isolated() {
    let api = Arc::new(MockApi::healthy().with_news(Err(server_error("/api/news"))));
    let app = mounted(&api).await;

    assert!(app.news().resource().state().is_failed());
    assert!(app.news().resource().state().shows_placeholder());
    assert!(app.tasks().store().state().is_ready());
    assert!(app.notes().resource().state().is_ready());
    assert!(app.weather().resource().state().is_ready());
}

#[tokio::test]
async fn test_complete_selected_task() {
    let api = Arc::new(MockApi::healthy());
    let mut app = mounted(&api).await;

    press(&mut app, KeyCode::Char(' ')).await;
    let store = app.tasks().store();
    assert!(store.get(&TaskId::from(1)).unwrap().completed);
    assert!(store.is_pending(&TaskId::from(1)));

    settle(&mut app, 1).await;
    assert!(app.tasks().store().get(&TaskId::from(1)).unwrap().completed);
    assert_eq!(app.tasks().store().pending_count(), 0);
    assert!(app.notification().is_none());
    assert!(api.calls().contains(&"complete 1".to_string()));
}

#[tokio::test]
async fn test_delete_second_task() {
    let api = Arc::new(MockApi::healthy());
    let mut app = mounted(&api).await;

    press(&mut app, KeyCode::Char('j')).await;
    assert_eq!(app.tasks().selected_index(), 1);
    press(&mut app, KeyCode::Char('d')).await;

    assert_eq!(app.tasks().store().tasks().len(), 1);
    assert_eq!(app.tasks().selected_index(), 0);

    settle(&mut app, 1).await;
    assert!(api.calls().contains(&"delete 2".to_string()));
    assert_eq!(app.tasks().store().tasks()[0].id, TaskId::from(1));
}

#[tokio::test]
async fn test_failed_complete_rolls_back_and_notifies() {
    let api = Arc::new(MockApi::healthy().failing_mutations());
    let mut app = mounted(&api).await;

    press(&mut app, KeyCode::Enter).await;
    settle(&mut app, 1).await;

    assert!(!app.tasks().store().get(&TaskId::from(1)).unwrap().completed);
    let note = app.notification().unwrap();
    assert!(note.is_error);
    assert_eq!(note.message, ERROR_TASK_COMPLETION_FAILED);

    press(&mut app, KeyCode::Esc).await;
    assert!(app.notification().is_none());
}

#[tokio::test]
async fn test_repeated_failed_complete_rolls_back_once() {
    let api = Arc::new(MockApi::healthy().failing_mutations());
    let mut app = mounted(&api).await;

    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.tasks().store().pending_count(), 2);

    settle(&mut app, 1).await;
    // The first answer leaves the task alone while the second is in flight
    assert!(app.notification().is_none());
    assert!(app.tasks().store().is_pending(&TaskId::from(1)));

    settle(&mut app, 1).await;
    assert!(!app.tasks().store().get(&TaskId::from(1)).unwrap().completed);
    assert_eq!(
        app.notification().map(|n| n.message.as_str()),
        Some(ERROR_TASK_COMPLETION_FAILED)
    );
}

#[tokio::test]
async fn test_failed_delete_restores_task() {
    let api = Arc::new(MockApi::healthy().failing_mutations());
    let mut app = mounted(&api).await;

    press(&mut app, KeyCode::Char('d')).await;
    assert_eq!(app.tasks().store().tasks().len(), 1);
    settle(&mut app, 1).await;

    assert_eq!(app.tasks().store().tasks().len(), 2);
    assert_eq!(app.tasks().store().tasks()[0].id, TaskId::from(1));
    assert_eq!(app.notification().map(|n| n.message.as_str()), Some(ERROR_TASK_DELETE_FAILED));
}

#[tokio::test]
async fn test_create_task_refreshes_list() {
    let api = Arc::new(MockApi::healthy());
    let mut app = mounted(&api).await;

    press(&mut app, KeyCode::Char('a')).await;
    assert!(app.is_task_input_visible());
    for c in "Buy milk".chars() {
        press(&mut app, KeyCode::Char(c)).await;
    }
    press(&mut app, KeyCode::Enter).await;
    assert!(!app.is_task_input_visible());

    // Creation result, then the task list reload it triggers
    settle(&mut app, 1).await;
    assert_eq!(app.notification().map(|n| n.message.as_str()), Some(SUCCESS_TASK_CREATED));
    assert!(app.tasks().store().state().is_loading());
    settle(&mut app, 1).await;
    assert!(app.tasks().store().state().is_ready());

    let calls = api.calls();
    assert!(calls.contains(&"create Buy milk".to_string()));
    assert_eq!(calls.iter().filter(|c| *c == "GET tasks").count(), 2);
}

#[tokio::test]
async fn test_task_input_cancel() {
    let api = Arc::new(MockApi::healthy());
    let mut app = mounted(&api).await;

    press(&mut app, KeyCode::Char('a')).await;
    // Global keys are typed into the dialog while it is open
    press(&mut app, KeyCode::Char('q')).await;
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.is_task_input_visible());
}

#[tokio::test]
async fn test_refresh_while_in_flight_is_ignored() {
    let api = Arc::new(MockApi::healthy());
    let mut app = app_with(&api, &Config::default());
    app.mount();

    app.handle_app_action(Action::RefreshAll).await;
    assert_eq!(app.active_job_count(), 4);

    settle(&mut app, 4).await;
    assert!(app.tasks().store().state().is_ready());
}

#[tokio::test]
async fn test_theme_starts_dark_and_toggles() {
    let api = Arc::new(MockApi::healthy());
    let mut app = mounted(&api).await;
    assert_eq!(app.theme(), Theme::Dark);

    press(&mut app, KeyCode::Char('t')).await;
    assert_eq!(app.theme(), Theme::Light);
    press(&mut app, KeyCode::Char('t')).await;
    assert_eq!(app.theme(), Theme::Dark);
}

#[tokio::test]
async fn test_focus_cycles() {
    let api = Arc::new(MockApi::healthy());
    let mut app = mounted(&api).await;
    assert_eq!(app.focus(), WidgetKind::Tasks);

    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.focus(), WidgetKind::Notes);
    press(&mut app, KeyCode::BackTab).await;
    press(&mut app, KeyCode::BackTab).await;
    assert_eq!(app.focus(), WidgetKind::News);
}

#[tokio::test]
async fn test_logs_dialog() {
    let api = Arc::new(MockApi::healthy());
    let mut app = mounted(&api).await;
    assert!(!app.logger().is_empty());

    press(&mut app, KeyCode::Char('G')).await;
    assert!(app.is_logs_visible());
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.is_logs_visible());
}

#[tokio::test]
async fn test_quit_unmounts_widgets() {
    let api = Arc::new(MockApi::healthy());
    let mut app = app_with(&api, &Config::default());
    app.mount();

    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());
    assert!(!app.tasks().store().resource().is_mounted());
    assert!(!app.news().resource().is_mounted());
    assert_eq!(app.active_job_count(), 0);
}

#[tokio::test]
async fn test_auto_refresh_interval() {
    let api = Arc::new(MockApi::healthy());
    let mut config = Config::default();
    config.refresh.auto_refresh_interval_minutes = 1;
    let mut app = app_with(&api, &config);
    app.mount();
    settle(&mut app, 4).await;

    assert!(!app.maybe_auto_refresh(Instant::now()));
    assert!(app.maybe_auto_refresh(Instant::now() + Duration::from_secs(61)));
    assert!(app.tasks().store().state().is_loading());
    settle(&mut app, 4).await;
}

#[tokio::test]
async fn test_auto_refresh_disabled_by_default() {
    let api = Arc::new(MockApi::healthy());
    let mut app = mounted(&api).await;
    assert!(!app.maybe_auto_refresh(Instant::now() + Duration::from_secs(3600)));
}
