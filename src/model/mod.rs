//! Data models for the library.
//!
//! - [`Author`]: a person who wrote books
//! - [`Book`]: a book, pointing at its author by id

mod author;
mod book;

pub use author::Author;
pub use book::Book;
