use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::ShopSchema;
use crate::error::Result;

/// Path of the GraphQL endpoint and its console.
pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(State(schema): State<ShopSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

/// HTTP routes: `POST /graphql`, optionally `GET /graphql` (GraphiQL), and `GET /health`.
pub fn router(schema: ShopSchema, graphiql_enabled: bool) -> Router {
    let mut endpoint = post(graphql_handler);
    if graphiql_enabled {
        endpoint = endpoint.get(graphiql);
    }

    Router::new()
        .route(GRAPHQL_PATH, endpoint)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Serve on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, schema: ShopSchema, graphiql_enabled: bool) -> Result<()> {
    axum::serve(listener, router(schema, graphiql_enabled)).await?;
    Ok(())
}

/// Bind `addr` and serve.
pub async fn run_server(schema: ShopSchema, addr: SocketAddr, graphiql_enabled: bool) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, graphiql = graphiql_enabled, "GraphQL server listening");
    serve(listener, schema, graphiql_enabled).await
}
