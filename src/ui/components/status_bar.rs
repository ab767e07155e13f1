//! Status bar component

use crate::constants::{STATUS_HINTS, TASKS_HINTS};
use crate::ui::core::WidgetKind;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// One-line message replacing the key hints until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub is_error: bool,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(
        f: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
        focus: WidgetKind,
        pending_mutations: usize,
        palette: &Palette,
    ) {
        let (text, color) = match notification {
            Some(note) if note.is_error => (format!("{} (Esc to dismiss)", note.message), palette.error),
            Some(note) => (note.message.clone(), palette.success),
            None if pending_mutations > 0 => (format!("🔄 Syncing {} change(s)...", pending_mutations), palette.highlight),
            None if focus == WidgetKind::Tasks => (format!("{} • {}", TASKS_HINTS, STATUS_HINTS), palette.muted),
            None => (STATUS_HINTS.to_string(), palette.muted),
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
