use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    let config = BookshelfConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load bookshelf configuration")?;

    match cli.command.unwrap_or_else(|| Commands::Serve(Default::default())) {
        Commands::Serve(args) => handle_serve(config, args),
        Commands::Query { query, variables } => {
            handle_query(CommandContext::new(config), query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(CommandContext::new(config), mutation, variables),
        Commands::Schema => handle_schema(CommandContext::new(config)),
    }
}
