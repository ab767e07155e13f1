//! Task creation dialog component

use super::badge::create_priority_badge;
use crate::api::NewTask;
use crate::constants::DIALOG_TITLE_NEW_TASK;
use crate::ui::core::{Action, Component, RenderContext};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct TaskInputDialog {
    content: String,
    priority: u8,
}

impl Default for TaskInputDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskInputDialog {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            priority: 1,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn reset(&mut self) {
        self.content.clear();
        self.priority = 1;
    }
}

impl Component for TaskInputDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ShowTaskInput(false),
            KeyCode::Enter => {
                let content = self.content.trim();
                if content.is_empty() {
                    return Action::None;
                }
                let task = NewTask {
                    content: content.to_string(),
                    priority: self.priority,
                };
                self.reset();
                Action::CreateTask(task)
            }
            KeyCode::Tab => {
                self.priority = self.priority % 4 + 1;
                Action::None
            }
            KeyCode::Backspace => {
                self.content.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.content.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let area = LayoutManager::centered_rect_lines(60, 6, rect);
        f.render_widget(Clear, area);

        let lines = vec![
            Line::from(vec![
                Span::raw("> "),
                Span::styled(format!("{}_", self.content), Style::default().fg(ctx.palette.success)),
            ]),
            Line::from(vec![
                Span::raw("Priority: "),
                create_priority_badge(self.priority, ctx.palette),
                Span::raw(format!(" P{}", self.priority)),
            ]),
            Line::from(Span::styled(
                "Enter: create • Tab: priority • Esc: cancel",
                Style::default().fg(ctx.palette.highlight),
            )),
        ];

        let dialog = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(DIALOG_TITLE_NEW_TASK)
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(ctx.palette.accent))
                .style(Style::default().bg(ctx.palette.background).fg(ctx.palette.foreground)),
        );
        f.render_widget(dialog, area);
    }
}
