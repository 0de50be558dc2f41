//! HTTP transport for the subgraph
//!
//! Serves GraphQL at `POST /` with:
//! - Batched request support
//! - Permissive CORS
//! - A uniform random 50-60ms pause per request, simulating backend latency
//! - Graceful shutdown on ctrl-c

use std::time::Duration;

use async_graphql::{BatchRequest, BatchResponse};
use axum::{
    extract::{Extension, Request},
    middleware::{self, Next},
    response::Response,
    routing::post,
    Json, Router,
};
use rand::Rng;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::schema::InventorySchema;

/// GraphQL handler executing single or batched requests against the schema
///
/// # Example
///
/// ```rust,no_run
/// use axum::{routing::post, Extension, Router};
/// use inventory_subgraph::{build_schema, graphql_handler, InventoryStore};
///
/// let schema = build_schema(InventoryStore::demo());
/// let app: Router = Router::new()
///     .route("/", post(graphql_handler))
///     .layer(Extension(schema));
/// ```
pub async fn graphql_handler(
    Extension(schema): Extension<InventorySchema>,
    request: Json<BatchRequest>,
) -> Json<BatchResponse> {
    Json(schema.execute_batch(request.0).await)
}

/// Pause for a random interval before handing the request on
async fn inject_latency(request: Request, next: Next) -> Response {
    let delay_ms =
        rand::thread_rng().gen_range(ServerConfig::LATENCY_MIN_MS..=ServerConfig::LATENCY_MAX_MS);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    next.run(request).await
}

/// Build the subgraph router with its middleware stack
pub fn router(schema: InventorySchema) -> Router {
    Router::new()
        .route("/", post(graphql_handler))
        .layer(Extension(schema))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(middleware::from_fn(inject_latency))
}

/// Serve the schema until ctrl-c
pub async fn serve(config: &ServerConfig, schema: InventorySchema) -> crate::Result<()> {
    let app = router(schema);
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    info!("🚀 Inventory subgraph ready at http://localhost:{}/", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available: serve until the process is killed
        std::future::pending::<()>().await;
    }
}
