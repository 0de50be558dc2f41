//! # inventory-subgraph
//!
//! Apollo Federation "Inventory" subgraph for the starstuff demo graph.
//!
//! ## Features
//!
//! - **Entity Store** - fixed in-memory inventory dataset with point lookups by upc
//! - **Reference Resolution** - Apollo Federation v2 entity resolution for `Product`
//! - **Shipping Estimates** - computed field over externally-owned `price`/`weight`
//! - **HTTP Transport** - axum server with batched requests, CORS, and latency injection
//!
//! ## Usage
//!
//! ```rust
//! use inventory_subgraph::{build_schema, InventoryStore};
//!
//! // Build a federation-enabled schema over the demo dataset
//! let schema = build_schema(InventoryStore::demo());
//! ```

pub mod config;
pub mod federation;
pub mod schema;
pub mod server;
pub mod store;

pub use config::ServerConfig;
pub use federation::{EntityResolver, ProductRef, ProductResolver};
pub use schema::{build_schema, InventorySchema, Product};
pub use server::{graphql_handler, serve};
pub use store::{InventoryRecord, InventoryStore};

use thiserror::Error;

/// Subgraph service errors
#[derive(Error, Debug)]
pub enum SubgraphError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Result type for subgraph operations
pub type Result<T> = std::result::Result<T, SubgraphError>;
