//! Terminal color palette
//!
//! All UI code takes colors from a [`Palette`] rather than hardcoding them,
//! so the `color` option can switch the whole interface to monochrome.

use ratatui::style::{Color, Modifier, Style};

use wander_core::world::GameOptions;

/// Colors used across the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary foreground text
    pub text: Color,
    /// Hints and footers
    pub text_dim: Color,
    /// Default border
    pub border: Color,
    /// Help overlay border and section titles
    pub accent: Color,
    /// Echoed player input
    pub echo: Color,
    /// Failed command messages
    pub bad: Color,
    /// Status values (credits, charge)
    pub good: Color,
}

impl Palette {
    pub fn colored() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Cyan,
            echo: Color::Yellow,
            bad: Color::LightRed,
            good: Color::LightGreen,
        }
    }

    /// Terminal default colors everywhere
    pub fn monochrome() -> Self {
        Self {
            text: Color::Reset,
            text_dim: Color::Reset,
            border: Color::Reset,
            accent: Color::Reset,
            echo: Color::Reset,
            bad: Color::Reset,
            good: Color::Reset,
        }
    }

    pub fn from_options(options: &GameOptions) -> Self {
        if options.color {
            Self::colored()
        } else {
            Self::monochrome()
        }
    }

    pub fn is_monochrome(&self) -> bool {
        *self == Self::monochrome()
    }

    /// Style for failure text; bold stands in for red when monochrome
    pub fn failure_style(&self) -> Style {
        let style = Style::default().fg(self.bad);
        if self.is_monochrome() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}
