//! Input line parsing

use super::Command;
use crate::world::ActionError;

/// Split a raw input line into a verb and an optional second word.
///
/// Words past the second are ignored. Returns `None` for a blank line.
pub fn split_words(line: &str) -> Option<(&str, Option<&str>)> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    Some((verb, words.next()))
}

/// Parse a raw input line into a command
pub fn parse_line(line: &str) -> Result<Command, ActionError> {
    let (verb, argument) = split_words(line).ok_or(ActionError::UnknownCommand)?;
    Command::from_words(verb, argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Verb;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("go east"), Some(("go", Some("east"))));
        assert_eq!(split_words("  look  "), Some(("look", None)));
        assert_eq!(split_words("go east quickly now"), Some(("go", Some("east"))));
        assert_eq!(split_words("   "), None);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("take Chair"), Ok(Command::Take("Chair".into())));
        assert_eq!(parse_line("GO West"), Ok(Command::Go("West".into())));
        assert_eq!(parse_line("stackBack"), Ok(Command::StackBack));
        assert_eq!(parse_line(""), Err(ActionError::UnknownCommand));
        assert_eq!(parse_line("dance"), Err(ActionError::UnknownCommand));
        assert_eq!(
            parse_line("eat cookie"),
            Err(ActionError::UnexpectedArgument { verb: Verb::Eat })
        );
    }
}
