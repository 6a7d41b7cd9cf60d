use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for tests. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: Some(book),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&AddressBook> {
        self.saved.as_ref()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.saved = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}
