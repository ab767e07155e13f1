//! Shared widget chrome: the bordered block and the loading placeholder.

use crate::constants::PLACEHOLDER_LOADING;
use crate::ui::core::RenderContext;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered block for a widget, highlighted when focused
pub fn widget_block<'a>(title: &'a str, ctx: &RenderContext) -> Block<'a> {
    let border_style = if ctx.focused {
        Style::default().fg(ctx.palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ctx.palette.border)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(ctx.palette.background).fg(ctx.palette.foreground))
}

/// Draw the placeholder used for both `Loading` and `Failed`
pub fn render_placeholder(f: &mut Frame, rect: Rect, block: Block, ctx: &RenderContext) {
    let placeholder = Paragraph::new(PLACEHOLDER_LOADING)
        .block(block)
        .style(Style::default().fg(ctx.palette.muted))
        .alignment(Alignment::Center);
    f.render_widget(placeholder, rect);
}
