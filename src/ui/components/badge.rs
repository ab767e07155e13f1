use crate::ui::theme::Palette;
use crate::utils::datetime::{format_human_date, is_overdue};
use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Create priority badges with flag symbols
#[must_use]
pub fn create_priority_badge(priority: u8, palette: &Palette) -> Span<'static> {
    match priority {
        4 => Span::styled("⚑", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)), // P1 = red flag
        3 => Span::styled(
            "⚑",
            Style::default().fg(Color::Rgb(255, 165, 0)).add_modifier(Modifier::BOLD),
        ), // P2 = orange flag
        2 => Span::styled("⚑", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)), // P3 = blue flag
        _ => Span::styled("⚐", Style::default().fg(palette.foreground)), // P4 and unknown
    }
}

/// Create a due date badge, red when overdue
#[must_use]
pub fn create_due_badge(due: NaiveDate, completed: bool, palette: &Palette) -> Span<'static> {
    let color = if !completed && is_overdue(due) {
        palette.error
    } else {
        palette.muted
    };
    Span::styled(format!("📅 {}", format_human_date(due)), Style::default().fg(color))
}
