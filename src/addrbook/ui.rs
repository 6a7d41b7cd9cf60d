//! Output side of a front end.
//!
//! The REPL only talks to [`UserInterface`], so another front end can be
//! plugged in without touching the command or API layers.

use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::model::Record;
use colored::Colorize;
use std::io::{self, IsTerminal, Stdout, Write};

/// Command usages and their one-line descriptions, in help order.
pub const HELP: &[(&str, &str)] = &[
    ("hello", "Greet the user"),
    ("add <name> <phone>", "Add a new contact"),
    (
        "change <name> <old_phone> <new_phone>",
        "Change an existing contact's phone number",
    ),
    ("del <name>", "Delete a contact"),
    ("phone <name>", "Show phone number(s) of a contact"),
    ("all", "Show all contacts"),
    ("add-birthday <name> <birthday>", "Add a birthday to a contact"),
    ("show-birthday <name>", "Show the birthday of a contact"),
    ("birthdays", "Show upcoming birthdays"),
    ("exit or close", "Exit the application"),
];

pub trait UserInterface {
    fn show_message(&mut self, message: &CmdMessage) -> Result<()>;

    fn show_contacts(&mut self, contacts: &[Record]) -> Result<()>;

    fn show_help(&mut self) -> Result<()>;

    /// Shows the prompt before a line is read.
    fn show_prompt(&mut self, prompt: &str) -> Result<()>;

    fn show_result(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            self.show_message(message)?;
        }
        Ok(())
    }
}

/// A [`UserInterface`] writing plain lines to a terminal or any other writer.
pub struct ConsoleInterface<W: Write = Stdout> {
    out: W,
    color: bool,
}

impl ConsoleInterface<Stdout> {
    /// Stdout, colored only when it is a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> ConsoleInterface<W> {
    /// Uncolored output into `out`.
    pub fn with_writer(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&self, message: &CmdMessage) -> String {
        if !self.color {
            return message.content.clone();
        }
        match message.level {
            MessageLevel::Info => message.content.normal().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        }
    }
}

impl<W: Write> UserInterface for ConsoleInterface<W> {
    fn show_message(&mut self, message: &CmdMessage) -> Result<()> {
        let line = self.styled(message);
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn show_contacts(&mut self, contacts: &[Record]) -> Result<()> {
        if contacts.is_empty() {
            writeln!(self.out, "No contacts found.")?;
        } else {
            for contact in contacts {
                writeln!(self.out, "{}", contact)?;
            }
        }
        Ok(())
    }

    fn show_help(&mut self) -> Result<()> {
        let heading = if self.color {
            "Available commands:".bold().to_string()
        } else {
            "Available commands:".to_string()
        };
        writeln!(self.out, "{}", heading)?;
        for (usage, description) in HELP {
            writeln!(self.out, "{} - {}", usage, description)?;
        }
        Ok(())
    }

    fn show_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Name;

    fn output(f: impl FnOnce(&mut ConsoleInterface<Vec<u8>>)) -> String {
        let mut ui = ConsoleInterface::with_writer(Vec::new());
        f(&mut ui);
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn messages_are_plain_lines() {
        let out = output(|ui| {
            ui.show_message(&CmdMessage::error("Contact does not exist."))
                .unwrap();
            ui.show_result(&CmdResult {
                messages: vec![CmdMessage::info("a"), CmdMessage::success("b")],
            })
            .unwrap();
        });
        assert_eq!(out, "Contact does not exist.\na\nb\n");
    }

    #[test]
    fn help_lists_every_command() {
        let out = output(|ui| ui.show_help().unwrap());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[1], "hello - Greet the user");
        assert_eq!(
            lines[3],
            "change <name> <old_phone> <new_phone> - Change an existing contact's phone number"
        );
        assert_eq!(lines.last(), Some(&"exit or close - Exit the application"));
        assert_eq!(lines.len(), HELP.len() + 1);
    }

    #[test]
    fn contacts_use_record_display() {
        let mut rec = Record::new(Name::new("alice").unwrap());
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("2222222222").unwrap();

        let out = output(|ui| ui.show_contacts(&[rec]).unwrap());
        assert_eq!(out, "Contact name: alice, phones: 1111111111; 2222222222\n");

        let empty = output(|ui| ui.show_contacts(&[]).unwrap());
        assert_eq!(empty, "No contacts found.\n");
    }

    #[test]
    fn prompt_has_no_newline() {
        let out = output(|ui| ui.show_prompt("Enter a command: ").unwrap());
        assert_eq!(out, "Enter a command: ");
    }
}
