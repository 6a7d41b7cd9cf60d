use super::helpers::at_least;
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, Usage};
use crate::model::{Name, Phone, Record};

/// `add <name> <phone>`: creates the contact or appends a phone to it.
///
/// The phone is validated before anything is stored, so bad input never
/// leaves an empty contact behind. A phone already on the record is skipped.
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = at_least(args, 2, Usage::NameAndPhone)?;
    let (name, phone) = (&args[0], &args[1]);
    let phone = Phone::new(phone.as_str())?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(Name::new(name.as_str())?));
        "Contact added."
    };

    if let Some(record) = book.find_mut(name) {
        if record.find_phone(phone.as_str()).is_none() {
            record.phones.push(phone);
        }
    }

    Ok(CmdResult::with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::args;
    use crate::error::BookError;

    #[test]
    fn adds_new_contact() {
        let mut book = AddressBook::new();
        let result = run(&mut book, &args(&["alice", "1234567890"])).unwrap();
        assert_eq!(result.text(), "Contact added.");
        assert_eq!(book.find("alice").unwrap().phone_list(", "), "1234567890");
    }

    #[test]
    fn second_phone_updates_contact() {
        let mut book = AddressBook::new();
        run(&mut book, &args(&["alice", "1234567890"])).unwrap();
        let result = run(&mut book, &args(&["alice", "0987654321", "extra"])).unwrap();
        assert_eq!(result.text(), "Contact updated.");
        assert_eq!(
            book.find("alice").unwrap().phone_list(", "),
            "1234567890, 0987654321"
        );
    }

    #[test]
    fn duplicate_phone_is_not_added_twice() {
        let mut book = AddressBook::new();
        run(&mut book, &args(&["alice", "1234567890"])).unwrap();
        run(&mut book, &args(&["alice", "1234567890"])).unwrap();
        assert_eq!(book.find("alice").unwrap().phones.len(), 1);
    }

    #[test]
    fn invalid_phone_stores_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, &args(&["alice", "12345"])).unwrap_err();
        assert!(matches!(err, BookError::InvalidPhone(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn requires_name_and_phone() {
        let mut book = AddressBook::new();
        let err = run(&mut book, &args(&["alice"])).unwrap_err();
        assert_eq!(err.user_message(), "Give me name and phone please.");
    }
}
