//! Apollo Federation v2 entity resolution for the Inventory subgraph
//!
//! Provides:
//! - `ProductRef`, the partial representation the federation engine hands over
//! - The `EntityResolver` trait and its inventory-backed implementation
//! - The shipping-estimate policy over externally-owned `price`/`weight`

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::schema::Product;
use crate::store::InventoryStore;

/// Partial `Product` representation supplied by the federation engine
///
/// Carries at minimum the `upc` key; `price` and `weight` are populated by
/// other subgraphs via field requirements and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub upc: String,
    pub price: Option<i64>,
    pub weight: Option<i64>,
}

impl ProductRef {
    /// Reference carrying only the entity key
    pub fn new(upc: impl Into<String>) -> Self {
        Self {
            upc: upc.into(),
            price: None,
            weight: None,
        }
    }
}

/// Entity resolver for Apollo Federation
#[async_trait]
pub trait EntityResolver: Send + Sync {
    /// Partial representation accepted by the resolver
    type Reference;
    /// Fully resolved entity
    type Entity;

    /// Resolve an entity from its representation
    async fn resolve_reference(&self, reference: Self::Reference) -> Self::Entity;
}

/// Resolves `Product` references against an injected inventory store
///
/// The store is handed in at construction rather than reached as ambient
/// state, so a real data source can replace the fixed dataset without
/// touching resolution logic.
pub struct ProductResolver {
    store: InventoryStore,
}

impl ProductResolver {
    /// Create a resolver over the given store
    pub fn new(store: InventoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityResolver for ProductResolver {
    type Reference = ProductRef;
    type Entity = Product;

    /// Shallow-merge the reference with the store's fields for its upc
    ///
    /// Store fields take precedence on key collision. An unknown upc yields
    /// the reference unchanged, with no inventory fields added.
    async fn resolve_reference(&self, reference: ProductRef) -> Product {
        let mut product = Product {
            upc: reference.upc,
            weight: reference.weight,
            price: reference.price,
            in_stock: None,
        };

        if let Some(record) = self.store.find_by_upc(&product.upc) {
            product.upc = record.upc.clone();
            product.in_stock = Some(record.in_stock);
        }

        product
    }
}

/// Shipping cost policy for a product with known price and weight
///
/// Fractional estimates are preserved rather than truncated.
pub fn shipping_estimate(price: i64, weight: i64) -> f64 {
    // free for expensive items
    if price > 1000 {
        return 0.0;
    }

    // estimate is based on weight
    weight as f64 * 0.5
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn resolver() -> ProductResolver {
        ProductResolver::new(InventoryStore::demo())
    }

    #[test]
    fn test_reference_from_representation_json() {
        let full: ProductRef =
            serde_json::from_value(json!({"upc": "1", "price": 200, "weight": 10})).unwrap();
        assert_eq!(full, ProductRef {
            upc: "1".to_string(),
            price: Some(200),
            weight: Some(10),
        });

        // key-only representations are valid, non-key fields are simply absent
        let key_only: ProductRef = serde_json::from_value(json!({"upc": "2"})).unwrap();
        assert_eq!(key_only, ProductRef::new("2"));
    }

    #[tokio::test]
    async fn test_resolve_reference_merges_stock_fields() {
        let reference = ProductRef {
            upc: "1".to_string(),
            price: Some(200),
            weight: Some(10),
        };

        let product = resolver().resolve_reference(reference).await;

        assert_eq!(product, Product {
            upc: "1".to_string(),
            weight: Some(10),
            price: Some(200),
            in_stock: Some(true),
        });
    }

    #[tokio::test]
    async fn test_resolve_reference_unknown_upc_returns_reference_unchanged() {
        let reference = ProductRef {
            upc: "99".to_string(),
            price: Some(5),
            weight: Some(1),
        };

        let product = resolver().resolve_reference(reference).await;

        assert_eq!(product, Product {
            upc: "99".to_string(),
            weight: Some(1),
            price: Some(5),
            in_stock: None,
        });
    }

    #[tokio::test]
    async fn test_resolve_reference_key_only() {
        let product = resolver().resolve_reference(ProductRef::new("2")).await;

        assert_eq!(product.upc, "2");
        assert_eq!(product.in_stock, Some(false));
        assert_eq!(product.price, None);
        assert_eq!(product.weight, None);
    }

    #[tokio::test]
    async fn test_resolve_reference_is_idempotent() {
        let resolver = resolver();
        let reference = ProductRef {
            upc: "3".to_string(),
            price: Some(42),
            weight: Some(7),
        };

        let first = resolver.resolve_reference(reference.clone()).await;
        let second = resolver.resolve_reference(reference).await;

        assert_eq!(first, second);
    }

    #[test]
    fn test_shipping_free_above_price_threshold() {
        assert_eq!(shipping_estimate(1500, 20), 0.0);
    }

    #[test]
    fn test_shipping_threshold_is_strict() {
        // price exactly 1000 still pays for shipping
        assert_eq!(shipping_estimate(1000, 20), 10.0);
    }

    #[test]
    fn test_shipping_preserves_fractions() {
        assert_eq!(shipping_estimate(50, 9), 4.5);
    }
}
