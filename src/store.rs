//! In-memory inventory dataset with point lookups by upc

use serde::{Deserialize, Serialize};

/// One product's inventory-local facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Unique product identifier, the entity lookup key
    pub upc: String,
    /// Whether the product is currently in stock
    pub in_stock: bool,
}

/// Immutable collection of inventory records
///
/// Records are constructed once at startup and never mutated, so concurrent
/// lookups from simultaneous requests need no locking.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    records: Vec<InventoryRecord>,
}

impl InventoryStore {
    /// Create a store over a fixed set of records
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    /// The four-row workshop dataset
    pub fn demo() -> Self {
        Self::new(vec![
            InventoryRecord {
                upc: "1".to_string(),
                in_stock: true,
            },
            InventoryRecord {
                upc: "2".to_string(),
                in_stock: false,
            },
            InventoryRecord {
                upc: "3".to_string(),
                in_stock: true,
            },
            InventoryRecord {
                upc: "4".to_string(),
                in_stock: false,
            },
        ])
    }

    /// Find the first record whose upc equals the input, in store order
    ///
    /// Upcs are expected to be unique; on a duplicate the first match wins.
    /// Absence is a normal result, not a failure.
    pub fn find_by_upc(&self, upc: &str) -> Option<&InventoryRecord> {
        self.records.iter().find(|record| record.upc == upc)
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_upc() {
        let store = InventoryStore::demo();
        let record = store.find_by_upc("1").unwrap();
        assert_eq!(record.upc, "1");
        assert!(record.in_stock);
    }

    #[test]
    fn test_find_all_demo_records() {
        let store = InventoryStore::demo();
        assert_eq!(store.len(), 4);
        for (upc, in_stock) in [("1", true), ("2", false), ("3", true), ("4", false)] {
            let record = store.find_by_upc(upc).unwrap();
            assert_eq!(record, &InventoryRecord {
                upc: upc.to_string(),
                in_stock,
            });
        }
    }

    #[test]
    fn test_find_unknown_upc() {
        let store = InventoryStore::demo();
        assert_eq!(store.find_by_upc("99"), None);
    }

    #[test]
    fn test_duplicate_upc_first_match_wins() {
        let store = InventoryStore::new(vec![
            InventoryRecord {
                upc: "7".to_string(),
                in_stock: true,
            },
            InventoryRecord {
                upc: "7".to_string(),
                in_stock: false,
            },
        ]);
        assert!(store.find_by_upc("7").unwrap().in_stock);
    }

    #[test]
    fn test_empty_store() {
        let store = InventoryStore::new(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.find_by_upc("1"), None);
    }
}
