//! Application state and main UI controller

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::debug;

use wander_core::action::{Command, parse_line};
use wander_core::{GameLoop, GameState, Outcome};

use crate::display::Palette;
use crate::input::{InputAction, InputLine, key_to_action};
use crate::widgets::{HelpWidget, LogKind, LogLine, MessagesWidget, StatusWidget};

/// UI mode - what the app is currently displaying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal play at the prompt
    Normal,
    /// Showing the help overlay
    Help,
}

/// Application state
pub struct App {
    /// Game loop controller
    game_loop: GameLoop,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Prompt line being edited
    input: InputLine,

    /// Everything shown in the message pane, bounded by `msghistory`
    log: Vec<LogLine>,

    palette: Palette,
}

impl App {
    /// Create the app and print the greeting
    pub fn new(state: GameState) -> Self {
        let palette = Palette::from_options(&state.options);
        let mut app = Self {
            game_loop: GameLoop::new(state),
            should_quit: false,
            mode: UiMode::Normal,
            input: InputLine::new(),
            log: Vec::new(),
            palette,
        };
        let welcome = app.game_loop.welcome();
        app.push_log(LogKind::Info, welcome);
        app
    }

    /// Get game state
    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    /// Get mutable game state
    pub fn state_mut(&mut self) -> &mut GameState {
        self.game_loop.state_mut()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn log(&self) -> &[LogLine] {
        &self.log
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    /// Handle input event - returns a line if one was submitted
    pub fn handle_event(&mut self, event: Event) -> Option<String> {
        let Event::Key(key) = event else {
            return None;
        };
        let action = key_to_action(key)?;

        if action == InputAction::Quit {
            self.should_quit = true;
            return None;
        }

        match self.mode {
            UiMode::Normal => self.handle_normal_input(action),
            UiMode::Help => {
                self.handle_help_input(action);
                None
            }
        }
    }

    /// Handle input at the prompt
    fn handle_normal_input(&mut self, action: InputAction) -> Option<String> {
        match action {
            InputAction::Insert(c) => self.input.push(c),
            InputAction::Backspace => self.input.backspace(),
            InputAction::Clear => self.input.clear(),
            InputAction::HistoryPrev => self.input.recall_prev(),
            InputAction::HistoryNext => self.input.recall_next(),
            InputAction::ToggleHelp => self.mode = UiMode::Help,
            InputAction::Submit => return Some(self.input.submit()),
            InputAction::Quit => self.should_quit = true,
        }
        None
    }

    /// Handle help overlay input
    fn handle_help_input(&mut self, action: InputAction) {
        if matches!(
            action,
            InputAction::ToggleHelp | InputAction::Clear | InputAction::Submit
        ) {
            self.mode = UiMode::Normal;
        }
    }

    /// Run one submitted line and log the result
    pub fn execute(&mut self, line: &str) -> Outcome {
        self.push_log(LogKind::Echo, line.trim());
        let outcome = self.game_loop.execute_line(line);
        debug!(success = outcome.success, quit = outcome.quit, "line executed");

        let kind = if outcome.success {
            LogKind::Info
        } else {
            LogKind::Failure
        };
        self.push_log(kind, outcome.message.clone());

        if outcome.quit {
            self.should_quit = true;
        } else if outcome.success && matches!(parse_line(line), Ok(Command::Help)) {
            self.mode = UiMode::Help;
        }
        outcome
    }

    fn push_log(&mut self, kind: LogKind, text: impl Into<String>) {
        self.log.push(LogLine::new(kind, text));
        let limit = self.state().options.msghistory.max(1);
        if self.log.len() > limit {
            let excess = self.log.len() - limit;
            self.log.drain(..excess);
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: messages and status side by side, prompt underneath
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(34)])
            .split(rows[0]);

        frame.render_widget(MessagesWidget::new(&self.log, self.palette), columns[0]);
        frame.render_widget(StatusWidget::new(self.state(), self.palette), columns[1]);

        self.render_prompt(frame, rows[1]);

        if self.mode == UiMode::Help {
            let area = centered_rect(70, 80, frame.area());
            frame.render_widget(HelpWidget::new(self.palette), area);
        }
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(Line::from(Span::styled(
                " F1 help ",
                Style::default().fg(self.palette.text_dim),
            )));

        let prompt = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.palette.echo)),
            Span::styled(self.input.text(), Style::default().fg(self.palette.text)),
        ]);

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(prompt).block(block), area);

        if self.mode == UiMode::Normal {
            let x = inner.x + 2 + self.input.text().chars().count() as u16;
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
