use super::helpers::exactly;
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result, Usage};

/// `del <name>`
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = exactly(args, 1, Usage::Name)?;
    let name = &args[0];
    book.delete(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    Ok(CmdResult::with_message(CmdMessage::success(
        "Contact deleted.",
    )))
}
