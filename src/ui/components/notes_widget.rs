use super::placeholder::{render_placeholder, widget_block};
use crate::api::Event;
use crate::constants::{EVENTS_PATH, TITLE_NOTES};
use crate::fetch::RemoteResource;
use crate::ui::core::{Action, Component, RenderContext, WidgetKind};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use std::collections::HashSet;

/// Upcoming events. Expanding an entry is local view state only.
pub struct NotesWidget {
    resource: RemoteResource<Vec<Event>>,
    expanded: HashSet<i64>,
    selected_index: usize,
    list_state: ListState,
}

impl Default for NotesWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesWidget {
    pub fn new() -> Self {
        Self {
            resource: RemoteResource::new(EVENTS_PATH),
            expanded: HashSet::new(),
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    pub fn resource(&self) -> &RemoteResource<Vec<Event>> {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut RemoteResource<Vec<Event>> {
        &mut self.resource
    }

    fn events(&self) -> &[Event] {
        self.resource.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn title(&self) -> String {
        match self.resource.data() {
            Some(events) => format!("{} ({})", TITLE_NOTES, events.len()),
            None => TITLE_NOTES.to_string(),
        }
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.events().get(self.selected_index).map(|event| event.id) else {
            return;
        };
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.events().len();
        if len == 0 {
            return;
        }
        self.selected_index = if down {
            (self.selected_index + 1).min(len - 1)
        } else {
            self.selected_index.saturating_sub(1)
        };
    }
}

impl Component for NotesWidget {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('r') => return Action::Refresh(WidgetKind::Notes),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let title = self.title();
        let block = widget_block(&title, ctx);

        if self.resource.state().shows_placeholder() {
            render_placeholder(f, rect, block, ctx);
            return;
        }

        let palette = ctx.palette;
        let items: Vec<ListItem> = self
            .events()
            .iter()
            .map(|event| {
                let marker = if self.is_expanded(event.id) { "▾ " } else { "▸ " };
                let mut lines = vec![Line::from(vec![
                    Span::styled(marker, Style::default().fg(palette.accent)),
                    Span::styled(event.event_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(event.event_date.clone(), Style::default().fg(palette.muted)),
                ])];
                if self.is_expanded(event.id) {
                    lines.extend(
                        event
                            .description
                            .lines()
                            .map(|line| Line::from(Span::raw(format!("    {}", line)))),
                    );
                }
                ListItem::new(lines)
            })
            .collect();

        let len = items.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(len - 1);
            self.list_state.select(Some(self.selected_index));
        }

        let highlight = if ctx.focused {
            Style::default().fg(palette.highlight)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
