use super::placeholder::{render_placeholder, widget_block};
use crate::api::{ApiError, Article};
use crate::constants::{NEWS_PATH, TITLE_NEWS};
use crate::fetch::{Generation, RemoteResource};
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

/// Headlines with a local "read more" toggle per article.
pub struct NewsWidget {
    resource: RemoteResource<Vec<Article>>,
    /// Articles have no id, so expansion is keyed by position.
    expanded: HashSet<usize>,
    selected_index: usize,
    list_state: ListState,
}

impl Default for NewsWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// First `limit` characters of `text`, marking truncation
pub fn preview(text: &str, limit: usize) -> (String, bool) {
    let text = text.trim();
    if text.chars().count() <= limit {
        return (text.to_string(), false);
    }
    let mut out: String = text.chars().take(limit).collect();
    out.push('…');
    (out, true)
}

impl NewsWidget {
    pub fn new() -> Self {
        Self {
            resource: RemoteResource::new(NEWS_PATH),
            expanded: HashSet::new(),
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    pub fn resource(&self) -> &RemoteResource<Vec<Article>> {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut RemoteResource<Vec<Article>> {
        &mut self.resource
    }

    /// Apply a fetch; positions change meaning with a new list, so expansion resets.
    pub fn resolve(&mut self, generation: Generation, result: Result<Vec<Article>, ApiError>) -> bool {
        let applied = self.resource.resolve(generation, result);
        if applied {
            self.expanded.clear();
            self.selected_index = 0;
        }
        applied
    }

    fn articles(&self) -> &[Article] {
        self.resource.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    fn toggle_selected(&mut self) {
        if self.selected_index >= self.articles().len() {
            return;
        }
        if !self.expanded.remove(&self.selected_index) {
            self.expanded.insert(self.selected_index);
        }
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.articles().len();
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

impl Component for NewsWidget {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('r') => return Action::Refresh(WidgetKind::News),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let block = widget_block(TITLE_NEWS, ctx);

        if self.resource.state().shows_placeholder() {
            render_placeholder(f, rect, block, ctx);
            return;
        }

        let palette = ctx.palette;
        let width = rect.width.saturating_sub(4).max(10) as usize;
        let items: Vec<ListItem> = self
            .articles()
            .iter()
            .enumerate()
            .map(|(index, article)| {
                let mut lines = vec![
                    Line::from(Span::styled(
                        article.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(article.date.clone(), Style::default().fg(palette.muted))),
                ];

                let expanded = self.is_expanded(index);
                let (body, truncated) = if expanded {
                    (article.text_content.trim().to_string(), false)
                } else {
                    preview(&article.text_content, ctx.display.news_preview_chars)
                };
                // List items do not wrap on their own
                lines.extend(
                    textwrap::wrap(&body, width)
                        .into_iter()
                        .map(|line| Line::from(line.into_owned())),
                );

                if expanded {
                    lines.push(Line::from(Span::styled(
                        article.link.clone(),
                        Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED),
                    )));
                    lines.push(Line::from(Span::styled("read less", Style::default().fg(palette.accent))));
                } else if truncated {
                    lines.push(Line::from(Span::styled("read more", Style::default().fg(palette.accent))));
                }
                lines.push(Line::from(""));
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
