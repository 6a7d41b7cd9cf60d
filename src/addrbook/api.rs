//! # API Facade
//!
//! [`BookApi`] owns the store and the in-memory book for one session. Every
//! front end talks to it through [`BookApi::execute`], which takes a raw input
//! line and returns an [`Outcome`].
//!
//! `execute` is the only place command errors are caught. Each
//! [`BookError`](crate::error::BookError) is turned into its fixed user
//! message at error level, so nothing a user types can abort the session.
//! Storage errors are different: they come out of [`BookApi::open`] and
//! [`BookApi::save`] as `Err` and the caller decides what to do.

use crate::book::{AddressBook, DEFAULT_UPCOMING_DAYS};
use crate::commands::{self, CmdMessage, CmdResult, Command};
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// What the front end should do after a line has been executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: CmdResult,
    pub exit: bool,
}

impl Outcome {
    fn proceed(result: CmdResult) -> Self {
        Self {
            result,
            exit: false,
        }
    }
}

pub struct BookApi<S: BookStore> {
    store: S,
    book: AddressBook,
    upcoming_days: u64,
    today: Option<NaiveDate>,
}

impl<S: BookStore> BookApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            today: None,
        })
    }

    pub fn with_upcoming_days(mut self, days: u64) -> Self {
        self.upcoming_days = days;
        self
    }

    /// Pins "today" for birthday queries instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    /// Parses and runs one input line.
    ///
    /// `exit`/`close` only signal termination; saving is left to the caller.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let parsed = commands::parse_input(line);
        debug!(command = %parsed.word, args = parsed.args.len(), "dispatching");

        let Some(command) = parsed.command else {
            return Outcome::proceed(CmdResult::with_message(CmdMessage::error(
                "Invalid command.",
            )));
        };

        let args = parsed.args.as_slice();
        let result = match command {
            Command::Exit => {
                return Outcome {
                    result: CmdResult::with_message(CmdMessage::info("Good bye!")),
                    exit: true,
                }
            }
            Command::Hello => Ok(CmdResult::with_message(CmdMessage::info(
                "How can I help you?",
            ))),
            Command::Add => commands::add::run(&mut self.book, args),
            Command::Change => commands::change::run(&mut self.book, args),
            Command::Delete => commands::delete::run(&mut self.book, args),
            Command::Phone => commands::phone::run(&self.book, args),
            Command::All => commands::all::run(&self.book, args),
            Command::AddBirthday => commands::birthday::add(&mut self.book, args),
            Command::ShowBirthday => commands::birthday::show(&self.book, args),
            Command::Birthdays => {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                commands::birthdays::run(&self.book, today, self.upcoming_days)
            }
        };

        Outcome::proceed(result.unwrap_or_else(|err| {
            debug!(command = %parsed.word, error = %err, kind = ?err.kind(), "command failed");
            CmdResult::with_message(CmdMessage::error(err.user_message()))
        }))
    }
}
