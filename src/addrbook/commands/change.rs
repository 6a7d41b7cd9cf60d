use super::helpers::{at_least, lookup_mut};
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, Usage};

/// `change <name> <old_phone> <new_phone>`
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = at_least(args, 3, Usage::NameAndPhone)?;
    let record = lookup_mut(book, &args[0])?;
    record.edit_phone(&args[1], &args[2])?;
    Ok(CmdResult::with_message(CmdMessage::success(
        "Contact updated.",
    )))
}
