//! Message log widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::display::Palette;

/// Where a log line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// The player's own input, echoed back
    Echo,
    /// Game output from a successful command
    Info,
    /// Game output from a failed command
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogKind,
    pub text: String,
}

impl LogLine {
    pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Widget for rendering the message log, newest at the bottom
pub struct MessagesWidget<'a> {
    log: &'a [LogLine],
    palette: Palette,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(log: &'a [LogLine], palette: Palette) -> Self {
        Self { log, palette }
    }

    fn style(&self, kind: LogKind) -> Style {
        match kind {
            LogKind::Echo => Style::default().fg(self.palette.echo),
            LogKind::Info => Style::default().fg(self.palette.text),
            LogKind::Failure => self.palette.failure_style(),
        }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" World of Wander ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border));
        let inner = block.inner(area);
        block.render(area, buf);

        // multi-line messages become several rows
        let lines: Vec<Line> = self
            .log
            .iter()
            .flat_map(|entry| {
                let style = self.style(entry.kind);
                let prefix = if entry.kind == LogKind::Echo { "> " } else { "" };
                entry
                    .text
                    .lines()
                    .map(move |row| Line::from(Span::styled(format!("{prefix}{row}"), style)))
            })
            .collect();

        let skip = lines.len().saturating_sub(inner.height as usize);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

        Paragraph::new(visible).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(log: &[LogLine], width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        MessagesWidget::new(log, Palette::colored()).render(area, &mut buf);
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_newest_lines_stay_visible() {
        let log: Vec<LogLine> = (0..20)
            .map(|i| LogLine::new(LogKind::Info, format!("line{i:02}")))
            .collect();
        let screen = rendered(&log, 20, 5);
        assert!(screen.contains("line19"));
        assert!(screen.contains("line17"));
        assert!(!screen.contains("line16"));
    }

    #[test]
    fn test_echo_prefix() {
        let log = vec![LogLine::new(LogKind::Echo, "look")];
        assert!(rendered(&log, 20, 4).contains("> look"));
    }

    #[test]
    fn test_multiline_message_splits() {
        let log = vec![LogLine::new(LogKind::Info, "first\nsecond")];
        let screen = rendered(&log, 12, 4);
        assert!(screen.contains("first"));
        assert!(screen.contains("second"));
    }
}
