//! # Command Layer
//!
//! One module per command. Each exposes a `run` function that takes the
//! command's arguments and the [`AddressBook`](crate::book::AddressBook) and
//! returns a [`CmdResult`]. Commands never print and never touch the disk;
//! errors come back as [`BookError`](crate::error::BookError) and are turned
//! into user messages by the API boundary.

pub mod add;
pub mod all;
pub mod birthday;
pub mod birthdays;
pub mod change;
pub mod delete;
pub mod helpers;
pub mod phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Delete,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Matches an already lowercased command word.
    pub fn from_word(word: &str) -> Option<Self> {
        let command = match word {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "del" => Command::Delete,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "exit" | "close" => Command::Exit,
            _ => return None,
        };
        Some(command)
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The lowercased first token, empty for a blank line.
    pub word: String,
    pub command: Option<Command>,
    pub args: Vec<String>,
}

pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let word = tokens.next().map(str::to_lowercase).unwrap_or_default();
    ParsedInput {
        command: Command::from_word(&word),
        word,
        args: tokens.map(String::from).collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// All message contents, one per line.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_only_the_command() {
        let parsed = parse_input("  ADD  Alice   1234567890 ");
        assert_eq!(parsed.word, "add");
        assert_eq!(parsed.command, Some(Command::Add));
        assert_eq!(parsed.args, ["Alice", "1234567890"]);
    }

    #[test]
    fn parse_blank_line() {
        let parsed = parse_input("   \t ");
        assert_eq!(parsed.word, "");
        assert_eq!(parsed.command, None);
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn exit_and_close_are_the_same_command() {
        assert_eq!(Command::from_word("exit"), Some(Command::Exit));
        assert_eq!(Command::from_word("close"), Some(Command::Exit));
        assert_eq!(Command::from_word("quit"), None);
    }

    #[test]
    fn result_text_joins_lines() {
        let mut result = CmdResult::with_message(CmdMessage::info("a"));
        result.add_message(CmdMessage::info("b"));
        assert_eq!(result.text(), "a\nb");
    }
}
