use super::placeholder::{render_placeholder, widget_block};
use crate::api::WeatherSnapshot;
use crate::constants::{TITLE_WEATHER, WEATHER_PATH};
use crate::fetch::RemoteResource;
use crate::ui::core::{Action, Component, RenderContext, WidgetKind};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub struct WeatherWidget {
    resource: RemoteResource<WeatherSnapshot>,
}

impl Default for WeatherWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherWidget {
    pub fn new() -> Self {
        Self {
            resource: RemoteResource::new(WEATHER_PATH),
        }
    }

    pub fn resource(&self) -> &RemoteResource<WeatherSnapshot> {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut RemoteResource<WeatherSnapshot> {
        &mut self.resource
    }
}

impl Component for WeatherWidget {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') => Action::Refresh(WidgetKind::Weather),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let block = widget_block(TITLE_WEATHER, ctx);

        let Some(weather) = self.resource.data() else {
            render_placeholder(f, rect, block, ctx);
            return;
        };

        let label = Style::default().fg(ctx.palette.muted);
        let lines = vec![
            Line::from(Span::styled(
                format!("{:.1}{}", weather.temperature, weather.unit_or_default()),
                Style::default().fg(ctx.palette.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Today: ", label),
                Span::raw(weather.todays_suggestion.clone()),
            ]),
            Line::from(vec![
                Span::styled("Tomorrow: ", label),
                Span::raw(weather.tomorrows_suggestion.clone()),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, rect);
    }
}
