//! Player action system
//!
//! The command vocabulary, the line parser, and one module per family of
//! commands. Every action takes the game state, mutates it, queues messages
//! with [`GameState::message`](crate::GameState::message) and reports what
//! happened through [`ActionResult`].

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::world::ActionError;

pub mod commands;
pub mod eat;
pub mod help;
pub mod movement;
pub mod pickup;
pub mod teleport;

pub use commands::parse_line;

/// Recognized command words, in the order help lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    Go,
    Quit,
    Help,
    Look,
    Eat,
    Back,
    StackBack,
    Take,
    Drop,
    Charge,
    Fire,
}

/// What a verb does with the word that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A second word must be given
    Required,
    /// A second word is rejected
    Forbidden,
    /// A second word is accepted and ignored
    Ignored,
}

impl Verb {
    pub const fn arity(&self) -> Arity {
        match self {
            Verb::Go | Verb::Take => Arity::Required,
            Verb::Look | Verb::Back | Verb::StackBack | Verb::Eat | Verb::Quit => Arity::Forbidden,
            Verb::Help | Verb::Drop | Verb::Charge | Verb::Fire => Arity::Ignored,
        }
    }

    /// All command words separated by two spaces
    pub fn word_list() -> String {
        Verb::iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Player command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave through the named exit
    Go(String),
    /// Swap current and previous location
    Back,
    /// Pop the history stack
    StackBack,
    Take(String),
    Drop,
    Eat,
    Charge,
    Fire,
    Look,
    Help,
    Quit,
}

impl Command {
    /// Build a command from a verb and its optional second word
    pub fn from_parts(verb: Verb, argument: Option<&str>) -> Result<Self, ActionError> {
        let argument = argument.map(str::trim).filter(|a| !a.is_empty());

        let argument = match (verb.arity(), argument) {
            (Arity::Required, None) => return Err(ActionError::MissingArgument { verb }),
            (Arity::Forbidden, Some(_)) => return Err(ActionError::UnexpectedArgument { verb }),
            (_, argument) => argument.unwrap_or_default().to_string(),
        };

        Ok(match verb {
            Verb::Go => Command::Go(argument),
            Verb::Take => Command::Take(argument),
            Verb::Quit => Command::Quit,
            Verb::Help => Command::Help,
            Verb::Look => Command::Look,
            Verb::Eat => Command::Eat,
            Verb::Back => Command::Back,
            Verb::StackBack => Command::StackBack,
            Verb::Drop => Command::Drop,
            Verb::Charge => Command::Charge,
            Verb::Fire => Command::Fire,
        })
    }

    /// Build a command from raw words; unknown verbs are rejected
    pub fn from_words(verb: &str, argument: Option<&str>) -> Result<Self, ActionError> {
        let verb: Verb = verb.parse().map_err(|_| ActionError::UnknownCommand)?;
        Self::from_parts(verb, argument)
    }

    pub const fn verb(&self) -> Verb {
        match self {
            Command::Go(_) => Verb::Go,
            Command::Back => Verb::Back,
            Command::StackBack => Verb::StackBack,
            Command::Take(_) => Verb::Take,
            Command::Drop => Verb::Drop,
            Command::Eat => Verb::Eat,
            Command::Charge => Verb::Charge,
            Command::Fire => Verb::Fire,
            Command::Look => Verb::Look,
            Command::Help => Verb::Help,
            Command::Quit => Verb::Quit,
        }
    }
}

/// What a successful action did to the player's position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The player is in a different location (or re-entered the same one)
    Moved,
    /// The player stayed put
    Stayed,
}

/// Result of executing an action
pub type ActionResult = Result<Effect, ActionError>;
