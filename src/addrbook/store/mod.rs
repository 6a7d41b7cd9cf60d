//! # Storage Layer
//!
//! The whole [`AddressBook`] is loaded at startup and written back wholesale.
//! [`BookStore`] hides where it goes so the API and REPL can run against
//! [`memory::InMemoryStore`] in tests.
//!
//! ## Storage Format
//!
//! [`fs::FileStore`] keeps one JSON document:
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "alice", "phones": ["1234567890"], "birthday": "15.06.1990" }
//!   ]
//! }
//! ```
//!
//! Contacts are stored in book order. Every phone and birthday is validated
//! again on load.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
