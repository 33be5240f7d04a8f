//! Recoverable command failures
//!
//! Every failed command produces one of these. None of them end the session;
//! the display text is what the player sees.

use thiserror::Error;

use crate::action::Verb;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("There is no door!")]
    NoExit { direction: String },

    #[error("No room to go back to.")]
    NoHistory,

    #[error("You are not carrying anything.")]
    NothingCarried,

    #[error("You can't pick up items until you eat a cookie.")]
    NotPermitted,

    #[error("There is no {name} in the room.")]
    ItemNotFound { name: String },

    #[error("{}", device_state_message(.charged))]
    InvalidDeviceState { charged: bool },

    #[error("I don't know what you mean...")]
    UnknownCommand,

    #[error("You have no cookie to eat.")]
    NotEdible { name: String },

    #[error("You are not carrying a Beamer.")]
    NotADevice { name: String },

    #[error("Your hands are full. Drop the {name} first.")]
    HandsFull { name: String },

    #[error("{}", missing_prompt(.verb))]
    MissingArgument { verb: Verb },

    #[error("{} what?", capitalize(.verb.as_ref()))]
    UnexpectedArgument { verb: Verb },
}

fn device_state_message(charged: &bool) -> &'static str {
    if *charged {
        "Beamer is already charged."
    } else {
        "Beamer is not charged!"
    }
}

/// "Go where?" for movement, "Take what?" for everything else
fn missing_prompt(verb: &Verb) -> String {
    let object = if *verb == Verb::Go { "where" } else { "what" };
    format!("{} {}?", capitalize(verb.as_ref()), object)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
