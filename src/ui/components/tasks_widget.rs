use super::badge::{create_due_badge, create_priority_badge};
use super::placeholder::{render_placeholder, widget_block};
use crate::api::Task;
use crate::config::DisplayConfig;
use crate::constants::TITLE_TASKS;
use crate::store::TaskStore;
use crate::ui::core::{Action, Component, RenderContext, WidgetKind};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

/// Task list panel. Owns the [`TaskStore`]; rows only borrow tasks from it.
pub struct TasksWidget {
    store: TaskStore,
    selected_index: usize,
    list_state: ListState,
}

impl Default for TasksWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl TasksWidget {
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected_index)
    }

    /// Panel title, with the task count once the list has loaded
    pub fn title(&self) -> String {
        match self.store.state().data() {
            Some(tasks) => format!("{} ({})", TITLE_TASKS, tasks.len()),
            None => TITLE_TASKS.to_string(),
        }
    }

    /// Keep the selection inside the list after it shrank or was replaced
    pub fn clamp_selection(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(len - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.store.tasks().len();
        if len == 0 {
            return;
        }
        self.selected_index = if down {
            (self.selected_index + 1).min(len - 1)
        } else {
            self.selected_index.saturating_sub(1)
        };
        self.list_state.select(Some(self.selected_index));
    }

    fn task_row(task: &Task, pending: bool, palette: &Palette, display: &DisplayConfig) -> ListItem<'static> {
        let mut spans = Vec::new();

        let (mark, mark_style) = if task.completed {
            ("[x] ", Style::default().fg(palette.success))
        } else {
            ("[ ] ", Style::default().fg(palette.foreground))
        };
        spans.push(Span::styled(mark, mark_style));

        if display.show_priorities {
            spans.push(create_priority_badge(task.priority, palette));
            spans.push(Span::raw(" "));
        }

        let content_style = if task.completed {
            Style::default().fg(palette.muted).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(palette.foreground)
        };
        spans.push(Span::styled(task.description.clone(), content_style));

        if display.show_due_dates {
            if let Some(due) = task.due {
                spans.push(Span::raw("  "));
                spans.push(create_due_badge(due, task.completed, palette));
            }
        }

        if pending {
            spans.push(Span::styled(" …", Style::default().fg(palette.muted)));
        }

        ListItem::new(Line::from(spans))
    }
}

impl Component for TasksWidget {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self
                .selected_task()
                .map(|task| Action::CompleteTask(task.id.clone()))
                .unwrap_or(Action::None),
            KeyCode::Char('d') => self
                .selected_task()
                .map(|task| Action::DeleteTask(task.id.clone()))
                .unwrap_or(Action::None),
            KeyCode::Char('a') => Action::ShowTaskInput(true),
            KeyCode::Char('r') => Action::Refresh(WidgetKind::Tasks),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let title = self.title();
        let block = widget_block(&title, ctx);

        if self.store.state().shows_placeholder() {
            render_placeholder(f, rect, block, ctx);
            return;
        }

        self.clamp_selection();
        let items: Vec<ListItem> = self
            .store
            .tasks()
            .iter()
            .map(|task| Self::task_row(task, self.store.is_pending(&task.id), ctx.palette, ctx.display))
            .collect();

        let highlight = if ctx.focused {
            Style::default().fg(ctx.palette.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
