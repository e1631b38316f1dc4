mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::store::Library;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub library: Arc<Library>,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        let library = if config.server.seed {
            Library::seeded()
        } else {
            Library::new()
        };
        Self {
            config,
            library: Arc::new(library),
        }
    }

    pub fn schema(&self) -> BookshelfSchema {
        build_schema(Arc::clone(&self.library))
    }
}
