//! # Bookshelf - a small GraphQL server for authors and books
//!
//! Bookshelf keeps two collections, authors and books, in process memory and
//! exposes them through a GraphQL API. Records can be queried and appended;
//! nothing is ever updated, deleted or persisted, so every restart begins
//! again from the same seed data.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:5000/graphql (GraphiQL included)
//! bookshelf serve
//!
//! # Ask the in-process schema directly
//! bookshelf query '{ author(id: 1) { name books { name } } }'
//!
//! # Print the SDL
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Data models (`Author`, `Book`)
//! - [`store`]: The in-memory library and its seed data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads the optional YAML config file holding the server settings.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP endpoint.
pub mod graphql;

/// Logging setup.
///
/// Installs the `tracing` subscriber: stderr plus an optional JSON log file.
pub mod logging;

/// Data models for the library.
pub mod model;

/// In-memory storage.
///
/// Holds authors and books in insertion order; append-only.
pub mod store;
