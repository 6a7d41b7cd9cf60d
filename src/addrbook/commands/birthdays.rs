use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

/// `birthdays`: who to congratulate within `days` of `today`. Arguments are ignored.
pub fn run(book: &AddressBook, today: NaiveDate, days: u64) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays_from(today, days);
    if upcoming.is_empty() {
        return Ok(CmdResult::with_message(CmdMessage::info(
            "No upcoming birthdays.",
        )));
    }

    let mut result = CmdResult::default();
    for entry in upcoming {
        result.add_message(CmdMessage::info(entry.to_string()));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::book_with;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn none_upcoming() {
        let book = book_with(&[("alice", &[], Some("01.01.1990")), ("bob", &[], None)]);
        assert_eq!(
            run(&book, monday(), 7).unwrap().text(),
            "No upcoming birthdays."
        );
    }

    #[test]
    fn lists_shifted_dates() {
        let book = book_with(&[
            ("sat", &[], Some("15.06.1990")),
            ("out", &[], Some("20.06.1990")),
            ("thu", &[], Some("13.06.1985")),
        ]);
        assert_eq!(
            run(&book, monday(), 7).unwrap().text(),
            "sat: 17.06.2024\nthu: 13.06.2024"
        );
    }

    #[test]
    fn window_length_is_configurable() {
        let book = book_with(&[("out", &[], Some("20.06.1990"))]);
        assert_eq!(run(&book, monday(), 10).unwrap().text(), "out: 20.06.2024");
    }
}
