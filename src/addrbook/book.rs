use crate::model::{Record, UpcomingBirthday};
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Days after today that still count as "upcoming".
pub const DEFAULT_UPCOMING_DAYS: u64 = 7;

/// Contacts keyed by name, kept in insertion order.
///
/// Re-adding a name replaces the stored record in place, so iteration order
/// is the order in which names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name.as_str()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name.as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name.as_str() == name)
    }

    /// Removes the record if present. Deleting an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|pos| self.records.remove(pos))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), DEFAULT_UPCOMING_DAYS)
    }

    /// Birthdays whose anniversary this year lies in `today..=today + days`.
    ///
    /// The window test uses the real anniversary; the reported date moves
    /// weekend anniversaries to the following Monday. Results keep record order.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: u64) -> Vec<UpcomingBirthday> {
        let end = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday?;
                let this_year = birthday.in_year(today.year());
                if this_year < today || this_year > end {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name.to_string(),
                    date: congratulation_date(this_year),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name.as_str() == name)
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            if book.find(record.name.as_str()).is_some() {
                warn!(name = %record.name, "duplicate contact, keeping the later entry");
            }
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

/// Saturdays and Sundays roll forward to Monday.
fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let shift = 7 - u64::from(date.weekday().num_days_from_monday());
            date.checked_add_days(Days::new(shift)).unwrap_or(date)
        }
        _ => date,
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Name;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, birthday: Option<&str>) -> Record {
        let mut rec = Record::new(Name::new(name).unwrap());
        if let Some(b) = birthday {
            rec.add_birthday(b).unwrap();
        }
        rec
    }

    #[test]
    fn add_find_delete() {
        let mut book = AddressBook::new();
        book.add_record(contact("alice", None));
        book.add_record(contact("bob", None));

        assert_eq!(book.len(), 2);
        assert!(book.find("alice").is_some());
        assert!(book.find("carol").is_none());

        assert!(book.delete("alice").is_some());
        assert!(book.delete("alice").is_none());
        assert!(book.find("alice").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn re_adding_a_name_replaces_in_place() {
        let mut book = AddressBook::new();
        book.add_record(contact("alice", None));
        book.add_record(contact("bob", None));
        book.add_record(contact("alice", Some("01.01.1990")));

        let names: Vec<_> = book.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["alice", "bob"]);
        assert!(book.find("alice").unwrap().birthday.is_some());
    }

    #[test]
    fn weekend_birthday_is_reported_on_monday() {
        // 2024-06-10 is a Monday
        let mut book = AddressBook::new();
        book.add_record(contact("sat", Some("15.06.1990")));
        book.add_record(contact("out", Some("20.06.1990")));

        let upcoming = book.upcoming_birthdays_from(date(2024, 6, 10), 7);
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "sat".into(),
                date: date(2024, 6, 17),
            }]
        );
    }

    #[test]
    fn window_is_inclusive_at_both_ends() {
        let mut book = AddressBook::new();
        book.add_record(contact("yesterday", Some("09.06.1980")));
        book.add_record(contact("today", Some("10.06.1980")));
        book.add_record(contact("last", Some("17.06.1980")));
        book.add_record(contact("beyond", Some("18.06.1980")));
        book.add_record(contact("none", None));

        let names: Vec<_> = book
            .upcoming_birthdays_from(date(2024, 6, 10), 7)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["today", "last"]);
    }

    #[test]
    fn inclusion_uses_the_unshifted_date() {
        // Window 2024-06-11 (Tue) ..= 2024-06-18 (Tue). Sunday 06-16 is in,
        // but reported as Monday 06-17.
        let mut book = AddressBook::new();
        book.add_record(contact("sun", Some("16.06.2001")));
        book.add_record(contact("wed", Some("12.06.2001")));

        let upcoming = book.upcoming_birthdays_from(date(2024, 6, 11), 7);
        assert_eq!(upcoming[0].date, date(2024, 6, 17));
        assert_eq!(upcoming[1].date, date(2024, 6, 12));
    }

    #[test]
    fn results_follow_record_order_not_date() {
        let mut book = AddressBook::new();
        book.add_record(contact("later", Some("14.06.1970")));
        book.add_record(contact("sooner", Some("11.06.1970")));

        let names: Vec<_> = book
            .upcoming_birthdays_from(date(2024, 6, 10), 7)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["later", "sooner"]);
    }

    #[test]
    fn leap_day_birthday_in_common_year() {
        // 2023-03-01 is a Wednesday
        let mut book = AddressBook::new();
        book.add_record(contact("leap", Some("29.02.2000")));

        let upcoming = book.upcoming_birthdays_from(date(2023, 2, 26), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, date(2023, 3, 1));
    }

    #[test]
    fn window_does_not_wrap_into_next_year() {
        let mut book = AddressBook::new();
        book.add_record(contact("newyear", Some("02.01.1990")));
        assert!(book
            .upcoming_birthdays_from(date(2024, 12, 30), 7)
            .is_empty());
    }

    #[test]
    fn local_clock_query_includes_todays_birthday() {
        let today = Local::now().date_naive();
        let mut book = AddressBook::new();
        book.add_record(contact("now", Some(&today.format("%d.%m.2000").to_string())));

        let upcoming = book.get_upcoming_birthdays();
        assert_eq!(upcoming.len(), 1);
        assert!(upcoming[0].date >= today);
    }

    #[test]
    fn duplicate_names_collapse_when_loading() {
        let book: AddressBook = serde_json::from_str(
            r#"[{"name":"a","phones":["1111111111"]},{"name":"b"},{"name":"a","phones":[]}]"#,
        )
        .unwrap();
        assert_eq!(book.len(), 2);
        assert!(book.find("a").unwrap().phones.is_empty());
    }

    #[test]
    fn display_lists_records() {
        let mut book = AddressBook::new();
        let mut alice = contact("alice", None);
        alice.add_phone("1234567890").unwrap();
        book.add_record(alice);
        book.add_record(contact("bob", None));
        assert_eq!(
            book.to_string(),
            "Contact name: alice, phones: 1234567890\nContact name: bob, phones: "
        );
    }
}
