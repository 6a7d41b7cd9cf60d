//! `add-birthday` and `show-birthday`.

use super::helpers::{exactly, lookup, lookup_mut};
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, Usage};
use crate::model::Birthday;

/// `add-birthday <name> <DD.MM.YYYY>`. The date is checked before the contact.
pub fn add(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = exactly(args, 2, Usage::NameAndBirthday)?;
    let birthday = Birthday::parse(&args[1])?;
    let record = lookup_mut(book, &args[0])?;
    record.birthday = Some(birthday);
    Ok(CmdResult::with_message(CmdMessage::success(
        "Birthday added.",
    )))
}

/// `show-birthday <name>`
pub fn show(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = exactly(args, 1, Usage::Name)?;
    let record = lookup(book, &args[0])?;
    let message = match record.birthday {
        Some(birthday) => CmdMessage::info(birthday.to_string()),
        None => CmdMessage::info("No birthday set."),
    };
    Ok(CmdResult::with_message(message))
}
