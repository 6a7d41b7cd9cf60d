use super::helpers::{at_least, lookup};
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, Usage};

/// `phone <name>`: the contact's phones, comma separated.
pub fn run(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = at_least(args, 1, Usage::Name)?;
    let record = lookup(book, &args[0])?;
    Ok(CmdResult::with_message(CmdMessage::info(
        record.phone_list(", "),
    )))
}
