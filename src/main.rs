//! Inventory subgraph entry point

use inventory_subgraph::{build_schema, serve, InventoryStore, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> inventory_subgraph::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let schema = build_schema(InventoryStore::demo());

    serve(&config, schema).await
}
