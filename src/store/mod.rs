//! In-memory storage for the library.
//!
//! All state lives in a single [`Library`] owned by the server process and
//! shared with resolvers as `Arc<Library>`. Records are only ever appended,
//! never updated or removed, and nothing is persisted.
//!
//! ## Components
//!
//! - [`Library`]: the two collections and their lookup/append operations
//! - [`SEED_AUTHORS`], [`SEED_BOOKS`]: the records present at start-up

mod library;
mod seed;

pub use library::Library;
pub use seed::{SEED_AUTHORS, SEED_BOOKS};
