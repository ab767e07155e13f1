use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dashterm::api::{Article, Event, TaskId};
use dashterm::ui::components::badge::create_priority_badge;
use dashterm::ui::components::news_widget::preview;
use dashterm::ui::components::{NewsWidget, NotesWidget, TaskInputDialog, TasksWidget, WeatherWidget};
use dashterm::config::DisplayConfig;
use dashterm::ui::core::{Action, Component, RenderContext, WidgetKind};
use dashterm::ui::Theme;
use ratatui::{backend::TestBackend, Terminal};

use crate::support::task;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_priority_badge_flags() {
    let palette = Theme::Dark.palette();
    assert_eq!(create_priority_badge(4, &palette).content, "⚑");
    assert_eq!(create_priority_badge(1, &palette).content, "⚐");
    assert_eq!(create_priority_badge(0, &palette).content, "⚐");
}

#[test]
fn test_news_preview() {
    assert_eq!(preview("short text", 160), ("short text".to_string(), false));

    let (text, truncated) = preview("abcdefghij", 4);
    assert!(truncated);
    assert_eq!(text, "abcd…");
}

#[test]
fn test_task_input_cycles_priority() {
    let mut dialog = TaskInputDialog::new();
    assert_eq!(dialog.priority(), 1);
    for expected in [2, 3, 4, 1] {
        dialog.handle_key_events(key(KeyCode::Tab));
        assert_eq!(dialog.priority(), expected);
    }
}

#[test]
fn test_task_input_ignores_blank_content() {
    let mut dialog = TaskInputDialog::new();
    dialog.handle_key_events(key(KeyCode::Char(' ')));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
}

#[test]
fn test_task_input_submits_trimmed_content() {
    let mut dialog = TaskInputDialog::new();
    for c in " Water plants ".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    dialog.handle_key_events(key(KeyCode::Backspace));
    dialog.handle_key_events(key(KeyCode::Tab));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::CreateTask(new_task) => {
            assert_eq!(new_task.content, "Water plants");
            assert_eq!(new_task.priority, 2);
        }
        other => panic!("expected CreateTask, got {other:?}"),
    }
    // The dialog is ready for the next task
    assert_eq!(dialog.content(), "");
    assert_eq!(dialog.priority(), 1);
}

#[test]
fn test_tasks_widget_keys_need_loaded_list() {
    let mut widget = TasksWidget::new();
    assert!(matches!(widget.handle_key_events(key(KeyCode::Char(' '))), Action::None));
    assert!(matches!(
        widget.handle_key_events(key(KeyCode::Char('r'))),
        Action::Refresh(WidgetKind::Tasks)
    ));
    assert!(matches!(
        widget.handle_key_events(key(KeyCode::Char('a'))),
        Action::ShowTaskInput(true)
    ));
}

#[test]
fn test_tasks_widget_targets_selected_task() {
    let mut widget = TasksWidget::new();
    let store = widget.store_mut();
    let generation = store.load().unwrap();
    store.resolve_load(generation, Ok(vec![task(1, "a"), task(2, "b")]));

    widget.handle_key_events(key(KeyCode::Down));
    match widget.handle_key_events(key(KeyCode::Char('d'))) {
        Action::DeleteTask(id) => assert_eq!(id, TaskId::from(2)),
        other => panic!("expected DeleteTask, got {other:?}"),
    }
    // Selection stops at the last row
    widget.handle_key_events(key(KeyCode::Down));
    assert_eq!(widget.selected_index(), 1);
}

#[test]
fn test_notes_widget_refresh_key() {
    let mut widget = NotesWidget::new();
    assert!(matches!(
        widget.handle_key_events(key(KeyCode::Char('r'))),
        Action::Refresh(WidgetKind::Notes)
    ));
}

#[test]
fn test_weather_widget_starts_loading() {
    let widget = WeatherWidget::new();
    assert!(widget.resource().state().shows_placeholder());
}

fn event(id: i64, name: &str) -> Event {
    Event {
        id,
        event_name: name.to_string(),
        event_date: "2025-03-10".to_string(),
        description: "Details".to_string(),
    }
}

fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        date: "2025-03-09".to_string(),
        text_content: "A long body that gets cut down to a preview".to_string(),
        link: "https://example.com".to_string(),
    }
}

fn loaded_notes(events: Vec<Event>) -> NotesWidget {
    let mut widget = NotesWidget::new();
    let generation = widget.resource_mut().start().unwrap();
    assert!(widget.resource_mut().resolve(generation, Ok(events)));
    widget
}

fn loaded_news(articles: Vec<Article>) -> NewsWidget {
    let mut widget = NewsWidget::new();
    let generation = widget.resource_mut().start().unwrap();
    assert!(widget.resolve(generation, Ok(articles)));
    widget
}

#[test]
fn test_notes_enter_toggles_selected_event() {
    let mut widget = loaded_notes(vec![event(10, "Dentist"), event(11, "Dinner")]);
    assert!(!widget.is_expanded(10));

    assert!(matches!(widget.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(widget.is_expanded(10));
    assert!(!widget.is_expanded(11));

    widget.handle_key_events(key(KeyCode::Down));
    widget.handle_key_events(key(KeyCode::Char(' ')));
    assert!(widget.is_expanded(11));

    widget.handle_key_events(key(KeyCode::Up));
    widget.handle_key_events(key(KeyCode::Enter));
    assert!(!widget.is_expanded(10));
    assert!(widget.is_expanded(11));
}

#[test]
fn test_notes_toggle_without_events_is_a_no_op() {
    let mut widget = NotesWidget::new();
    assert!(matches!(widget.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(!widget.is_expanded(10));
}

#[test]
fn test_news_read_more_toggles() {
    let mut widget = loaded_news(vec![article("First"), article("Second")]);
    assert!(!widget.is_expanded(0));

    widget.handle_key_events(key(KeyCode::Enter));
    assert!(widget.is_expanded(0));
    widget.handle_key_events(key(KeyCode::Char('j')));
    widget.handle_key_events(key(KeyCode::Enter));
    assert!(widget.is_expanded(1));

    widget.handle_key_events(key(KeyCode::Enter));
    assert!(!widget.is_expanded(1));
    assert!(widget.is_expanded(0));
}

#[test]
fn test_news_reload_resets_expansion() {
    let mut widget = loaded_news(vec![article("First"), article("Second")]);
    widget.handle_key_events(key(KeyCode::Down));
    widget.handle_key_events(key(KeyCode::Enter));
    assert!(widget.is_expanded(1));
    assert_eq!(widget.selected_index(), 1);

    let generation = widget.resource_mut().refresh().unwrap();
    assert!(widget.resolve(generation, Ok(vec![article("Fresh"), article("Other")])));
    assert!(!widget.is_expanded(1));
    assert_eq!(widget.selected_index(), 0);
}

#[test]
fn test_news_stale_result_keeps_expansion() {
    let mut widget = loaded_news(vec![article("First")]);
    widget.handle_key_events(key(KeyCode::Enter));

    // Unmounting drops whatever was still in flight
    let generation = widget.resource_mut().refresh().unwrap();
    widget.resource_mut().unmount();
    assert!(!widget.resolve(generation, Ok(vec![article("Late")])));
    assert!(widget.is_expanded(0));
}

#[test]
fn test_panel_titles_show_counts() {
    let mut tasks = TasksWidget::new();
    assert_eq!(tasks.title(), "Tasks");
    let store = tasks.store_mut();
    let generation = store.load().unwrap();
    store.resolve_load(generation, Ok(vec![task(1, "a"), task(2, "b")]));
    assert_eq!(tasks.title(), "Tasks (2)");
    tasks.store_mut().delete(&TaskId::from(1)).unwrap();
    assert_eq!(tasks.title(), "Tasks (1)");

    assert_eq!(NotesWidget::new().title(), "Notes");
    assert_eq!(loaded_notes(vec![event(10, "Dentist")]).title(), "Notes (1)");
    assert_eq!(loaded_notes(Vec::new()).title(), "Notes (0)");
}

#[test]
fn test_news_body_wraps_to_panel_width() {
    let mut long = article("Headline");
    long.text_content = "alpha beta gamma delta epsilon zeta".to_string();
    let mut widget = loaded_news(vec![long]);

    let palette = Theme::Dark.palette();
    let display = DisplayConfig::default();
    let ctx = RenderContext {
        palette: &palette,
        display: &display,
        focused: false,
    };
    let mut terminal = Terminal::new(TestBackend::new(24, 10)).unwrap();
    terminal.draw(|f| widget.render(f, f.area(), &ctx)).unwrap();

    let buffer = terminal.backend().buffer();
    let rows: Vec<String> = (0..buffer.area.height)
        .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect();
    assert!(rows.iter().any(|row| row.contains("alpha beta gamma ")));
    assert!(rows.iter().any(|row| row.contains("delta epsilon zeta")));
    assert!(!rows.iter().any(|row| row.contains("gamma delta")));
}
