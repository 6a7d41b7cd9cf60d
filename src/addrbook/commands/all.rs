use super::helpers::exactly;
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, Usage};

/// `all`: one `<name>: <phones>` line per contact.
pub fn run(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    exactly(args, 0, Usage::NoArguments)?;

    if book.is_empty() {
        return Ok(CmdResult::with_message(CmdMessage::info(
            "No contacts found.",
        )));
    }

    let mut result = CmdResult::default();
    for record in book.records() {
        result.add_message(CmdMessage::info(format!(
            "{}: {}",
            record.name,
            record.phone_list(", ")
        )));
    }
    Ok(result)
}
