use async_graphql::{
    ServerError, Value,
    http::GraphiQLSource,
    parser::{parse_query, types::OperationType},
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use super::schema::BookshelfSchema;
use crate::{config::ServerSettings, error::Result};

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
struct ServerState {
    schema: BookshelfSchema,
    graphiql: bool,
}

/// Builds the router serving `/graphql`.
///
/// `POST` executes the request body. `GET` executes the `query` URL parameter,
/// or serves the GraphiQL IDE when it is enabled and no query was given.
/// Mutations sent over `GET` are refused with 405.
pub fn router(schema: BookshelfSchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .with_state(ServerState { schema, graphiql })
}

/// Binds to the configured address and serves until Ctrl-C or SIGTERM.
pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "GraphQL server listening");
    if settings.graphiql {
        tracing::info!("GraphiQL available at http://{addr}{GRAPHQL_PATH}");
    }

    axum::serve(listener, router(schema, settings.graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn graphql_post(
    State(state): State<ServerState>,
    request: GraphQLRequest,
) -> (StatusCode, GraphQLResponse) {
    execute(&state.schema, request).await
}

async fn graphql_get(State(state): State<ServerState>, request: Request) -> Response {
    if state.graphiql && !has_query_param(request.uri().query()) {
        return graphiql().into_response();
    }

    let request: GraphQLRequest = match GraphQLRequest::from_request(request, &state).await {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };
    if selects_mutation(&request.0) {
        tracing::debug!("Refusing mutation sent over GET");
        return mutation_over_get();
    }
    execute(&state.schema, request).await.into_response()
}

/// Whether the operation `request` would run is a mutation.
///
/// Without an `operationName` every operation in the document counts. A
/// document that does not parse is left for `execute` to report.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    let wanted = request.operation_name.as_deref();

    document
        .operations
        .iter()
        .filter(|&(name, _)| wanted.is_none() || name.map(|n| n.as_str()) == wanted)
        .any(|(_, operation)| matches!(operation.node.ty, OperationType::Mutation))
}

fn mutation_over_get() -> Response {
    let response = async_graphql::Response::from_errors(vec![ServerError::new(
        "Can only perform a mutation operation from a POST request",
        None,
    )]);
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        GraphQLResponse::from(response),
    )
        .into_response()
}

async fn execute(
    schema: &BookshelfSchema,
    request: GraphQLRequest,
) -> (StatusCode, GraphQLResponse) {
    let request = request.into_inner();
    tracing::debug!(
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "Executing GraphQL request"
    );

    let response = schema.execute(request).await;

    // Parse and validation errors carry no path and leave `data` null: the
    // request never reached a resolver.
    let rejected = response.data == Value::Null
        && !response.errors.is_empty()
        && response.errors.iter().all(|e| e.path.is_empty());
    let status = if rejected {
        tracing::debug!(errors = ?response.errors, "GraphQL request rejected");
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    (status, response.into())
}

fn has_query_param(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair == "query" || pair.starts_with("query="))
    })
}

fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_query_param() {
        assert!(has_query_param(Some("query=%7B%20books%20%7B%20id%20%7D%20%7D")));
        assert!(has_query_param(Some("operationName=A&query=x")));
        assert!(!has_query_param(Some("operationName=A")));
        assert!(!has_query_param(Some("")));
        assert!(!has_query_param(None));
    }

    fn request(query: &str, operation_name: Option<&str>) -> async_graphql::Request {
        let request = async_graphql::Request::new(query);
        match operation_name {
            Some(name) => request.operation_name(name),
            None => request,
        }
    }

    #[test]
    fn test_selects_mutation() {
        assert!(selects_mutation(&request(
            r#"mutation { addAuthor(name: "A") { id } }"#,
            None
        )));
        assert!(!selects_mutation(&request("{ books { id } }", None)));
        assert!(!selects_mutation(&request("query Q { books { id } }", None)));
    }

    #[test]
    fn test_selects_mutation_by_operation_name() {
        let document = r#"query Read { books { id } } mutation Write { addAuthor(name: "A") { id } }"#;
        assert!(!selects_mutation(&request(document, Some("Read"))));
        assert!(selects_mutation(&request(document, Some("Write"))));
        assert!(selects_mutation(&request(document, None)));
    }

    #[test]
    fn test_selects_mutation_ignores_unparsable_documents() {
        assert!(!selects_mutation(&request("mutation {", None)));
    }
}
