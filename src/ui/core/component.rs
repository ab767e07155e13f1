use super::actions::Action;
use crate::config::DisplayConfig;
use crate::ui::theme::Palette;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Everything a widget needs from the shell to draw itself
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub display: &'a DisplayConfig,
    pub focused: bool,
}

pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext);
}
