use crate::api::{ApiError, DashboardApi};
use crate::config::{Config, DisplayConfig};
use crate::constants::{
    ERROR_TASK_COMPLETION_FAILED, ERROR_TASK_CREATE_FAILED, ERROR_TASK_DELETE_FAILED, SUCCESS_TASK_CREATED,
};
use crate::logger::Logger;
use crate::store::{MutationKind, MutationOutcome};
use crate::ui::components::{
    LogsDialog, NewsWidget, NotesWidget, Notification, StatusBar, TaskInputDialog, TasksWidget, WeatherWidget,
};
use crate::ui::core::{Action, Component, EventType, RenderContext, TaskManager, WidgetKind};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The dashboard shell: owns the four widgets, the theme, and every
/// request in flight.
pub struct AppComponent {
    // Widgets
    tasks: TasksWidget,
    notes: NotesWidget,
    weather: WeatherWidget,
    news: NewsWidget,

    // Dialogs
    logs_dialog: LogsDialog,
    task_input: TaskInputDialog,
    show_logs: bool,
    show_task_input: bool,

    // Shell state
    focus: WidgetKind,
    theme: Theme,
    display: DisplayConfig,
    notification: Option<Notification>,

    // Services
    api: Arc<dyn DashboardApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    auto_refresh: Option<Duration>,
    last_refresh: Instant,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn DashboardApi>, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();

        Self {
            tasks: TasksWidget::new(),
            notes: NotesWidget::new(),
            weather: WeatherWidget::new(),
            news: NewsWidget::new(),
            logs_dialog: LogsDialog::new(logger.clone()),
            task_input: TaskInputDialog::new(),
            show_logs: false,
            show_task_input: false,
            focus: WidgetKind::default(),
            theme: Theme::default(),
            display: config.display.clone(),
            notification: None,
            api,
            task_manager,
            background_action_rx,
            logger,
            auto_refresh: config.refresh.interval(),
            last_refresh: Instant::now(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tasks(&self) -> &TasksWidget {
        &self.tasks
    }

    pub fn notes(&self) -> &NotesWidget {
        &self.notes
    }

    pub fn weather(&self) -> &WeatherWidget {
        &self.weather
    }

    pub fn news(&self) -> &NewsWidget {
        &self.news
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn focus(&self) -> WidgetKind {
        self.focus
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn is_task_input_visible(&self) -> bool {
        self.show_task_input
    }

    pub fn is_logs_visible(&self) -> bool {
        self.show_logs
    }

    /// Number of background requests still tracked
    pub fn active_job_count(&self) -> usize {
        self.task_manager.job_count()
    }

    /// Start the initial fetch of every widget
    pub fn mount(&mut self) {
        self.logger.log("Dashboard: mounting widgets".to_string());
        for kind in WidgetKind::ALL {
            self.start_fetch(kind);
        }
        self.last_refresh = Instant::now();
    }

    fn start_fetch(&mut self, kind: WidgetKind) {
        let api = Arc::clone(&self.api);
        let spawned = match kind {
            WidgetKind::Tasks => self.task_manager.spawn_fetch(
                self.tasks.store_mut().resource_mut(),
                move || async move { api.fetch_tasks().await },
                |generation, result| Action::TasksLoaded { generation, result },
            ),
            WidgetKind::Notes => self.task_manager.spawn_fetch(
                self.notes.resource_mut(),
                move || async move { api.fetch_events().await },
                |generation, result| Action::EventsLoaded { generation, result },
            ),
            WidgetKind::Weather => self.task_manager.spawn_fetch(
                self.weather.resource_mut(),
                move || async move { api.fetch_weather().await },
                |generation, result| Action::WeatherLoaded { generation, result },
            ),
            WidgetKind::News => self.task_manager.spawn_fetch(
                self.news.resource_mut(),
                move || async move { api.fetch_news().await },
                |generation, result| Action::NewsLoaded { generation, result },
            ),
        };

        match spawned {
            Some(job_id) => self
                .logger
                .log(format!("{}: fetch started (job {})", kind.title(), job_id)),
            None => self
                .logger
                .log(format!("{}: fetch already in flight, refresh ignored", kind.title())),
        }
    }

    /// Handle global keyboard shortcuts that aren't widget-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('R') => Action::RefreshAll,
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Esc if self.notification.is_some() => Action::DismissNotification,
            _ => Action::None,
        }
    }

    /// Route a key to the open dialog, the shell, or the focused widget
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Action {
        if self.show_task_input {
            return self.task_input.handle_key_events(key);
        }
        if self.show_logs {
            return self.logs_dialog.handle_key_events(key);
        }

        let action = self.handle_global_key(key);
        if !matches!(action, Action::None) {
            return action;
        }

        match self.focus {
            WidgetKind::Tasks => self.tasks.handle_key_events(key),
            WidgetKind::Notes => self.notes.handle_key_events(key),
            WidgetKind::Weather => self.weather.handle_key_events(key),
            WidgetKind::News => self.news.handle_key_events(key),
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.logger.log("Dashboard: quitting".to_string());
                self.unmount_all();
                Action::Quit
            }
            Action::FocusNext => {
                self.focus = self.focus.next();
                Action::None
            }
            Action::FocusPrevious => {
                self.focus = self.focus.previous();
                Action::None
            }
            Action::Refresh(kind) => {
                self.start_fetch(kind);
                Action::None
            }
            Action::RefreshAll => {
                for kind in WidgetKind::ALL {
                    self.start_fetch(kind);
                }
                self.last_refresh = Instant::now();
                Action::None
            }
            Action::TasksLoaded { generation, result } => {
                let outcome = Self::describe_load(&result.as_ref().map(Vec::len));
                if self.tasks.store_mut().resolve_load(generation, result) {
                    self.logger.log(format!("Tasks: {}", outcome));
                    self.tasks.clamp_selection();
                }
                Action::None
            }
            Action::EventsLoaded { generation, result } => {
                let outcome = Self::describe_load(&result.as_ref().map(Vec::len));
                if self.notes.resource_mut().resolve(generation, result) {
                    self.logger.log(format!("Notes: {}", outcome));
                }
                Action::None
            }
            Action::WeatherLoaded { generation, result } => {
                let outcome = Self::describe_load(&result.as_ref().map(|_| 1));
                if self.weather.resource_mut().resolve(generation, result) {
                    self.logger.log(format!("Weather: {}", outcome));
                }
                Action::None
            }
            Action::NewsLoaded { generation, result } => {
                let outcome = Self::describe_load(&result.as_ref().map(Vec::len));
                if self.news.resolve(generation, result) {
                    self.logger.log(format!("News: {}", outcome));
                }
                Action::None
            }
            Action::CompleteTask(task_id) => {
                let Some(mutation) = self.tasks.store_mut().complete(&task_id) else {
                    self.logger
                        .log(format!("Task: cannot complete - task {} not found", task_id));
                    return Action::None;
                };
                self.logger.log(format!("Task: completing task {}", task_id));
                let api = Arc::clone(&self.api);
                self.task_manager
                    .spawn_mutation(mutation, async move { api.complete_task(&task_id).await });
                Action::None
            }
            Action::DeleteTask(task_id) => {
                let Some(mutation) = self.tasks.store_mut().delete(&task_id) else {
                    self.logger
                        .log(format!("Task: cannot delete - task {} not found", task_id));
                    return Action::None;
                };
                self.logger.log(format!("Task: deleting task {}", task_id));
                self.tasks.clamp_selection();
                let api = Arc::clone(&self.api);
                self.task_manager
                    .spawn_mutation(mutation, async move { api.delete_task(&task_id).await });
                Action::None
            }
            Action::MutationFinished { mutation, result } => {
                if let Err(err) = &result {
                    self.logger
                        .log(format!("❌ {:?} of task {} failed: {}", mutation.kind, mutation.task_id, err));
                }
                let outcome = self.tasks.store_mut().resolve_mutation(mutation.id, result);
                match outcome {
                    MutationOutcome::Confirmed => {
                        self.logger
                            .log(format!("✅ {:?} of task {} confirmed", mutation.kind, mutation.task_id));
                    }
                    MutationOutcome::RolledBack { reverted } => {
                        let message = match reverted {
                            MutationKind::Complete => ERROR_TASK_COMPLETION_FAILED,
                            MutationKind::Delete => ERROR_TASK_DELETE_FAILED,
                        };
                        self.notification = Some(Notification::error(message));
                        self.tasks.clamp_selection();
                    }
                    MutationOutcome::Deferred => {
                        self.logger.log(format!(
                            "Task {}: waiting for newer changes before rolling back",
                            mutation.task_id
                        ));
                    }
                    MutationOutcome::Superseded => {
                        self.logger
                            .log(format!("Task {}: failure superseded by newer state", mutation.task_id));
                    }
                    MutationOutcome::Unknown => {}
                }
                Action::None
            }
            Action::CreateTask(new_task) => {
                self.show_task_input = false;
                self.logger.log(format!(
                    "Task: creating '{}' with priority {}",
                    new_task.content, new_task.priority
                ));
                let api = Arc::clone(&self.api);
                self.task_manager.spawn_request(
                    format!("Create task '{}'", new_task.content),
                    async move { api.create_task(&new_task).await },
                    Action::TaskCreated,
                );
                Action::None
            }
            Action::TaskCreated(result) => {
                match result {
                    Ok(()) => {
                        self.logger.log(SUCCESS_TASK_CREATED.to_string());
                        self.notification = Some(Notification::info(SUCCESS_TASK_CREATED));
                        self.start_fetch(WidgetKind::Tasks);
                    }
                    Err(err) => {
                        self.logger.log(format!("{}: {}", ERROR_TASK_CREATE_FAILED, err));
                        self.notification = Some(Notification::error(ERROR_TASK_CREATE_FAILED));
                    }
                }
                Action::None
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                self.logger.log(format!("Theme: switched to {:?}", self.theme));
                Action::None
            }
            Action::ShowLogs(show) => {
                self.show_logs = show;
                if show {
                    self.logs_dialog.reset_scroll();
                }
                Action::None
            }
            Action::ShowTaskInput(show) => {
                self.show_task_input = show;
                if !show {
                    self.task_input.reset();
                }
                Action::None
            }
            Action::DismissNotification => {
                self.notification = None;
                Action::None
            }
            Action::None => Action::None,
        }
    }

    fn describe_load(result: &Result<usize, &ApiError>) -> String {
        match result {
            Ok(count) => format!("loaded {} item(s)", count),
            Err(err) => format!("❌ load failed: {}", err),
        }
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_event(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let _final_action = self.handle_app_action(action).await;
        Ok(())
    }

    /// Drain results reported by background jobs
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_jobs();
        if !finished.is_empty() {
            log::debug!("Cleaned up {} finished jobs: {:?}", finished.len(), finished);
        }

        actions
    }

    /// Wait for the next result reported by a background job
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    /// Refresh every widget once the configured interval has elapsed
    pub fn maybe_auto_refresh(&mut self, now: Instant) -> bool {
        let Some(interval) = self.auto_refresh else {
            return false;
        };
        if now.duration_since(self.last_refresh) < interval {
            return false;
        }

        self.logger.log("Dashboard: auto-refresh".to_string());
        for kind in WidgetKind::ALL {
            self.start_fetch(kind);
        }
        self.last_refresh = now;
        true
    }

    /// Tear every widget down so late responses are dropped
    fn unmount_all(&mut self) {
        self.tasks.store_mut().unmount();
        self.notes.resource_mut().unmount();
        self.weather.resource_mut().unmount();
        self.news.resource_mut().unmount();
        self.task_manager.cancel_all_jobs();
        self.should_quit = true;
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.theme.palette();
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
            rect,
        );

        let areas = LayoutManager::dashboard_layout(rect);
        let display = &self.display;
        let focus = self.focus;
        let context = |kind: WidgetKind| RenderContext {
            palette: &palette,
            display,
            focused: focus == kind,
        };

        let tasks_ctx = context(WidgetKind::Tasks);
        let notes_ctx = context(WidgetKind::Notes);
        let weather_ctx = context(WidgetKind::Weather);
        let news_ctx = context(WidgetKind::News);
        self.tasks.render(f, areas.tasks, &tasks_ctx);
        self.notes.render(f, areas.notes, &notes_ctx);
        self.weather.render(f, areas.weather, &weather_ctx);
        self.news.render(f, areas.news, &news_ctx);

        StatusBar::render(
            f,
            areas.status,
            self.notification.as_ref(),
            self.focus,
            self.tasks.store().pending_count(),
            &palette,
        );

        let dialog_ctx = RenderContext {
            palette: &palette,
            display: &self.display,
            focused: true,
        };
        if self.show_logs {
            self.logs_dialog.render(f, rect, &dialog_ctx);
        }
        if self.show_task_input {
            self.task_input.render(f, rect, &dialog_ctx);
        }
    }
}
