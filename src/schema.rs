//! GraphQL schema for the Inventory subgraph
//!
//! Declares the `Product` federation entity keyed by `upc`, with `price` and
//! `weight` owned by other subgraphs, `inStock` owned locally, and
//! `shippingEstimate` requiring both external fields to be fetched before
//! this subgraph's resolver runs.

use async_graphql::{
    ComplexObject, Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject, ID,
};

use crate::federation::{shipping_estimate, EntityResolver, ProductRef, ProductResolver};
use crate::store::InventoryStore;

/// Schema type served by this subgraph
pub type InventorySchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Product entity contribution: locally-owned stock status plus the
/// externally-owned fields the shipping estimate depends on
///
/// Resolved entities may be cached by the calling engine for up to a minute.
/// The hint is advisory; the dataset never changes, so no invalidation path
/// exists or is needed.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
#[graphql(extends, complex, cache_control(max_age = 60))]
pub struct Product {
    #[graphql(external)]
    pub upc: String,
    #[graphql(external)]
    pub weight: Option<i64>,
    #[graphql(external)]
    pub price: Option<i64>,
    pub in_stock: Option<bool>,
}

#[ComplexObject]
impl Product {
    /// Derived shipping estimate
    ///
    /// Only invoked by the engine once `price` and `weight` have been
    /// fetched from the owning subgraphs; absent inputs surface as null
    /// rather than an error.
    #[graphql(requires = "price weight")]
    async fn shipping_estimate(&self) -> Option<f64> {
        match (self.price, self.weight) {
            (Some(price), Some(weight)) => Some(shipping_estimate(price, weight)),
            _ => None,
        }
    }
}

/// Query root: no public fields, only the entity-resolution hook
pub struct Query;

#[Object(extends = true)]
impl Query {
    /// Reference-resolution entry point for `Product`
    #[graphql(entity)]
    async fn find_product_by_upc(
        &self,
        ctx: &Context<'_>,
        upc: ID,
    ) -> async_graphql::Result<Product> {
        let resolver = ctx.data::<ProductResolver>()?;
        Ok(resolver.resolve_reference(ProductRef::new(upc.0)).await)
    }
}

/// Build the federation-enabled schema over an injected inventory store
pub fn build_schema(store: InventoryStore) -> InventorySchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(ProductResolver::new(store))
        .enable_federation()
        .finish()
}
