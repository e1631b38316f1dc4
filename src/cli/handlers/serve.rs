use anyhow::{Context, Result};

use crate::cli::ServeArgs;
use crate::config::{BookshelfConfig, ServerSettings};
use crate::graphql::{GRAPHQL_PATH, run_server};

use super::CommandContext;

pub fn handle_serve(mut config: BookshelfConfig, args: ServeArgs) -> Result<()> {
    apply_overrides(&mut config.server, args);
    let ctx = CommandContext::new(config);
    let settings = &ctx.config.server;

    tracing::info!(
        authors = ctx.library.author_count(),
        books = ctx.library.book_count(),
        "Library ready"
    );
    println!(
        "Starting GraphQL server on http://{}:{}{}",
        settings.host, settings.port, GRAPHQL_PATH
    );

    tokio::runtime::Runtime::new()?
        .block_on(run_server(ctx.schema(), settings))
        .with_context(|| format!("Failed to serve on {}:{}", settings.host, settings.port))?;
    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(settings: &mut ServerSettings, args: ServeArgs) {
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if args.no_graphiql {
        settings.graphiql = false;
    }
    if args.no_seed {
        settings.seed = false;
    }
}
