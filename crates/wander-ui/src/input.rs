//! Input handling - turn key events into line edits

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Insert(char),
    Backspace,
    /// Enter: hand the line to the game
    Submit,
    /// Up arrow: recall an earlier line
    HistoryPrev,
    /// Down arrow: move forward through recalled lines
    HistoryNext,
    /// Ctrl-U or Esc: clear the line
    Clear,
    /// F1: toggle the help overlay
    ToggleHelp,
    /// Ctrl-C: leave immediately
    Quit,
}

/// Convert a key event to a prompt action
pub fn key_to_action(key: KeyEvent) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputAction::Quit),
            KeyCode::Char('u') => Some(InputAction::Clear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(InputAction::Insert(c)),
        KeyCode::Backspace => Some(InputAction::Backspace),
        KeyCode::Enter => Some(InputAction::Submit),
        KeyCode::Up => Some(InputAction::HistoryPrev),
        KeyCode::Down => Some(InputAction::HistoryNext),
        KeyCode::Esc => Some(InputAction::Clear),
        KeyCode::F(1) => Some(InputAction::ToggleHelp),
        _ => None,
    }
}

/// Longest line the prompt accepts
pub const MAX_LINE: usize = 80;

/// The line being typed plus earlier submitted lines
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    buffer: String,
    recall: Vec<String>,
    /// Position in `recall` while browsing; `None` when editing a fresh line
    recall_pos: Option<usize>,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn push(&mut self, c: char) {
        if self.buffer.chars().count() < MAX_LINE && !c.is_control() {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.recall_pos = None;
    }

    /// Take the current line, remembering it for recall; blank lines
    /// are returned but not remembered
    pub fn submit(&mut self) -> String {
        let line = std::mem::take(&mut self.buffer);
        self.recall_pos = None;
        if !line.trim().is_empty() && self.recall.last() != Some(&line) {
            self.recall.push(line.clone());
        }
        line
    }

    pub fn recall_prev(&mut self) {
        if self.recall.is_empty() {
            return;
        }
        let pos = match self.recall_pos {
            None => self.recall.len() - 1,
            Some(pos) => pos.saturating_sub(1),
        };
        self.recall_pos = Some(pos);
        self.buffer = self.recall[pos].clone();
    }

    pub fn recall_next(&mut self) {
        match self.recall_pos {
            Some(pos) if pos + 1 < self.recall.len() => {
                self.recall_pos = Some(pos + 1);
                self.buffer = self.recall[pos + 1].clone();
            }
            Some(_) => self.clear(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('g'))),
            Some(InputAction::Insert('g'))
        );
        assert_eq!(key_to_action(key(KeyCode::Enter)), Some(InputAction::Submit));
        assert_eq!(
            key_to_action(key(KeyCode::F(1))),
            Some(InputAction::ToggleHelp)
        );
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputAction::Quit)
        );
        assert_eq!(key_to_action(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_edit_and_submit() {
        let mut line = InputLine::new();
        for c in "go eastx".chars() {
            line.push(c);
        }
        line.backspace();
        assert_eq!(line.text(), "go east");
        assert_eq!(line.submit(), "go east");
        assert_eq!(line.text(), "");
    }

    #[test]
    fn test_line_length_capped() {
        let mut line = InputLine::new();
        for _ in 0..(MAX_LINE + 10) {
            line.push('a');
        }
        assert_eq!(line.text().len(), MAX_LINE);
    }

    #[test]
    fn test_recall() {
        let mut line = InputLine::new();
        for text in ["look", "go east", "go east", "  "] {
            for c in text.chars() {
                line.push(c);
            }
            line.submit();
        }

        line.recall_prev();
        assert_eq!(line.text(), "go east");
        line.recall_prev();
        assert_eq!(line.text(), "look");
        line.recall_prev();
        assert_eq!(line.text(), "look");
        line.recall_next();
        assert_eq!(line.text(), "go east");
        line.recall_next();
        assert_eq!(line.text(), "");
    }
}
