//! Status panel widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use wander_core::GameState;

use crate::display::Palette;

/// Widget for rendering where the player is and what they hold
pub struct StatusWidget<'a> {
    state: &'a GameState,
    palette: Palette,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState, palette: Palette) -> Self {
        Self { state, palette }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let s = self.state;
        let carried = s
            .carried
            .as_ref()
            .map_or_else(
                || "nothing".to_string(),
                |item| format!("{} ({})", item.name(), item.class()),
            );
        let device = s
            .carried
            .as_ref()
            .and_then(|item| item.as_device())
            .map_or_else(|| "-".to_string(), |d| d.state().to_string());
        let exits = s.current_location().exit_string();

        vec![
            ("Player", s.options.name.clone()),
            ("Location", s.current_location().short_description().to_string()),
            ("Exits", exits.trim_start_matches("Exits:").trim().to_string()),
            ("Carrying", carried),
            ("Credits", s.pickup_credits.to_string()),
            ("Beamer", device),
            ("History", s.history.len().to_string()),
        ]
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(self.palette.text_dim);
        let value = Style::default().fg(self.palette.good);

        let lines: Vec<Line> = self
            .rows()
            .into_iter()
            .map(|(name, text)| {
                Line::from(vec![
                    Span::styled(format!("{name:<9}"), label),
                    Span::styled(text, value),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
