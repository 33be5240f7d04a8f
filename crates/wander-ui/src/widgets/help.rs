//! Help overlay widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use wander_core::action::help::help_text;

use crate::display::Palette;

fn key_help() -> &'static str {
    r#"Keys
────
  Enter     Run the typed command
  Up/Down   Recall earlier commands
  Esc       Clear the line
  F1        Show or hide this help
  Ctrl-C    Quit at once

Commands
────────
  go <direction>   Walk through an exit
  back             Return to the previous room
  stackback        Retrace your path one room at a time
  take <item>      Pick something up (cookies are free)
  drop             Put down what you carry
  eat              Eat a cookie to earn pickup credits
  charge / fire    Use a beamer
  look             Describe the room again
  quit             Leave the game"#
}

/// Help overlay showing the command words and key bindings
pub struct HelpWidget {
    palette: Palette,
}

impl HelpWidget {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn text() -> String {
        format!("{}\n\n{}", help_text(), key_help())
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(" Help ")
            .title_bottom(Line::from(" F1 or Esc to close ").centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent));

        Paragraph::new(Self::text())
            .block(block)
            .style(Style::default().fg(self.palette.text))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_covers_vocabulary() {
        let text = HelpWidget::text();
        for word in ["go", "stackback", "charge", "fire", "F1"] {
            assert!(text.contains(word), "missing {word}");
        }
    }
}
