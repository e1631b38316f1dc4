//! GraphQL schema, resolvers and HTTP endpoint for the library.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on http://127.0.0.1:5000/graphql)
//! bookshelf serve
//!
//! # Execute a query from CLI
//! bookshelf query '{ author(id: 1) { name books { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addBook(name: "Orphan", authorId: 999) { id author { name } }'
//! ```
//!
//! ## Schema
//!
//! - **Types**: `Book` (`id`, `name`, `authorId`, `author`), `Author` (`id`, `name`, `books`)
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, Mutation, Query, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
