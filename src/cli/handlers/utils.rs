use anyhow::{Context, Result};
use async_graphql::{Request, Variables};

use crate::graphql::BookshelfSchema;

pub fn parse_variables(variables: Option<&str>) -> Result<Variables> {
    match variables {
        Some(v) => serde_json::from_str(v).context("Invalid --variables JSON"),
        None => Ok(Variables::default()),
    }
}

/// Executes `document` in-process and prints the response envelope as JSON.
///
/// GraphQL errors end up in the printed `errors` array, not in the returned `Result`.
pub fn execute_and_print(
    schema: &BookshelfSchema,
    document: &str,
    variables: Option<&str>,
) -> Result<()> {
    let request = Request::new(document).variables(parse_variables(variables)?);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if response.is_err() {
        tracing::debug!(errors = ?response.errors, "GraphQL request returned errors");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
