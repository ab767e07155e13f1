//! Diagnostic log dialog

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
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

pub struct LogsDialog {
    logger: Logger,
    scroll: u16,
}

impl LogsDialog {
    pub fn new(logger: Logger) -> Self {
        Self { logger, scroll: 0 }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }
}

impl Component for LogsDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.logger.len().saturating_sub(1) as u16;
                self.scroll = (self.scroll + 1).min(max);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let area = LayoutManager::centered_rect(80, 80, rect);
        f.render_widget(Clear, area);

        let palette = ctx.palette;
        let logs = self.logger.get_logs();
        let lines: Vec<Line> = if logs.is_empty() {
            vec![Line::from(Span::styled(
                "No diagnostic logs available",
                Style::default().fg(palette.muted),
            ))]
        } else {
            logs.into_iter()
                .map(|entry| {
                    let color = if entry.contains('❌') || entry.contains("failed") {
                        palette.error
                    } else if entry.contains('✅') {
                        palette.success
                    } else {
                        palette.foreground
                    };
                    Line::from(Span::styled(entry, Style::default().fg(color)))
                })
                .collect()
        };

        let dialog = Paragraph::new(lines).scroll((self.scroll, 0)).block(
            Block::default()
                .title(DIALOG_TITLE_LOGS)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .style(Style::default().bg(palette.background).fg(palette.foreground)),
        );
        f.render_widget(dialog, area);
    }
}
