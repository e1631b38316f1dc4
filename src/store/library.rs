use super::seed::{SEED_AUTHORS, SEED_BOOKS};
use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book},
};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Authors and books, in insertion order.
///
/// Lookups are linear scans. Both collections are small and there are no
/// indices to keep in sync, since records are only ever appended.
#[derive(Debug, Default)]
pub struct Library {
    authors: RwLock<Vec<Author>>,
    books: RwLock<Vec<Book>>,
}

// A panic while holding a guard cannot leave a Vec half-pushed, so the data
// behind a poisoned lock is still valid.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Ids are assigned as `len + 1`.
fn next_id(len: usize, kind: &'static str) -> Result<i32> {
    len.checked_add(1)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or(BookshelfError::IdExhausted(kind))
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library holding the start-up authors and books.
    pub fn seeded() -> Self {
        let authors = SEED_AUTHORS
            .iter()
            .map(|&(id, name)| Author::new(id, name))
            .collect();
        let books = SEED_BOOKS
            .iter()
            .map(|&(id, name, author_id)| Book::new(id, name, author_id))
            .collect();

        Self {
            authors: RwLock::new(authors),
            books: RwLock::new(books),
        }
    }

    pub fn authors(&self) -> Vec<Author> {
        read(&self.authors).clone()
    }

    pub fn books(&self) -> Vec<Book> {
        read(&self.books).clone()
    }

    /// First author with the given id.
    pub fn author(&self, id: i32) -> Option<Author> {
        read(&self.authors).iter().find(|a| a.id == id).cloned()
    }

    /// First book with the given id.
    pub fn book(&self, id: i32) -> Option<Book> {
        read(&self.books).iter().find(|b| b.id == id).cloned()
    }

    /// All books pointing at `author_id`, whether or not that author exists.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        read(&self.books)
            .iter()
            .filter(|b| b.is_by(author_id))
            .cloned()
            .collect()
    }

    pub fn add_author(&self, name: String) -> Result<Author> {
        let mut authors = write(&self.authors);
        let author = Author::new(next_id(authors.len(), "author")?, name);
        tracing::info!(id = author.id, name = %author.name, "Adding author");

        authors.push(author.clone());
        Ok(author)
    }

    /// Appends a book. `author_id` is stored as given, even if no such author exists.
    pub fn add_book(&self, name: String, author_id: i32) -> Result<Book> {
        let mut books = write(&self.books);
        let book = Book::new(next_id(books.len(), "book")?, name, author_id);
        tracing::info!(
            id = book.id,
            name = %book.name,
            author_id = book.author_id,
            "Adding book"
        );

        books.push(book.clone());
        Ok(book)
    }

    pub fn author_count(&self) -> usize {
        read(&self.authors).len()
    }

    pub fn book_count(&self) -> usize {
        read(&self.books).len()
    }
}
