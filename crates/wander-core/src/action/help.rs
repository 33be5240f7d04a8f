//! Help and greeting text

use super::Verb;

pub const GAME_TITLE: &str = "World of Wander";

/// Greeting shown once when a game starts
pub fn welcome_text() -> String {
    format!(
        "Welcome to the {GAME_TITLE}!\n\
         {GAME_TITLE} is an adventure game where you can explore rooms and interact with the environment!\n\
         Type 'help' if you need help."
    )
}

/// Response to the `help` command
pub fn help_text() -> String {
    format!(
        "You are lost. You are alone. You wander\n\
         around at the university.\n\
         \n\
         Your command words are:\n   {}",
        Verb::word_list()
    )
}
