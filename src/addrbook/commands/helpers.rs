use crate::book::AddressBook;
use crate::error::{BookError, Result, Usage};
use crate::model::Record;

/// Returns the first `n` arguments, rejecting shorter lists. Extras are ignored.
pub fn at_least<'a>(args: &'a [String], n: usize, usage: Usage) -> Result<&'a [String]> {
    if args.len() < n {
        return Err(BookError::MissingArguments(usage));
    }
    Ok(&args[..n])
}

/// Requires exactly `n` arguments.
pub fn exactly<'a>(args: &'a [String], n: usize, usage: Usage) -> Result<&'a [String]> {
    match args.len() {
        len if len < n => Err(BookError::MissingArguments(usage)),
        len if len > n => Err(BookError::UnexpectedArguments(usage)),
        _ => Ok(args),
    }
}

pub fn lookup<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

pub fn lookup_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::book::AddressBook;
    use crate::model::{Name, Record};

    pub fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    pub fn book_with(contacts: &[(&str, &[&str], Option<&str>)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phones, birthday) in contacts {
            let mut rec = Record::new(Name::new(*name).unwrap());
            for phone in *phones {
                rec.add_phone(phone).unwrap();
            }
            if let Some(b) = birthday {
                rec.add_birthday(b).unwrap();
            }
            book.add_record(rec);
        }
        book
    }
}
