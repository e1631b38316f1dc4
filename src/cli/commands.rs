use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A GraphQL server for an in-memory library of authors and books"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a YAML config file
    #[arg(long, global = true, env = "BOOKSHELF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve(ServeArgs),

    /// Execute a GraphQL query against a fresh in-process library
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in GraphQL SDL
    Schema,
}

#[derive(Args, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "BOOKSHELF_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "BOOKSHELF_PORT")]
    pub port: Option<u16>,

    /// Do not serve the GraphiQL IDE on GET /graphql
    #[arg(long)]
    pub no_graphiql: bool,

    /// Start with an empty library instead of the built-in authors and books
    #[arg(long)]
    pub no_seed: bool,
}
