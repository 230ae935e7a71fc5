//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Domain Types                        │
//! │                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐         │
//! │  │    Product      │        │    LogEntry     │         │
//! │  │  ─────────────  │        │  ─────────────  │         │
//! │  │  id (i64)       │        │  id (i64)       │         │
//! │  │  sku (business) │        │  user           │         │
//! │  │  name           │        │  timestamp      │         │
//! │  │  price          │        │  action         │         │
//! │  │  stock          │        │  details        │         │
//! │  └─────────────────┘        └─────────────────┘         │
//! │                                                         │
//! │  NewProduct: caller-supplied fields for an insert,      │
//! │  before the store assigns id and timestamps.            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A product has:
//! - `id`: i64 - store-assigned, immutable, used for lookups and relations
//! - `sku`: business identifier - human-assigned, unique, immutable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A stocked item as persisted in the store.
///
/// Owned exclusively by the storage layer: every read re-queries the
/// database, nothing caches product state across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier (autoincrement). Immutable.
    pub id: i64,

    /// Stock Keeping Unit - unique business identifier. Immutable once set.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Unit price. Invariant: `price >= 0`.
    pub price: f64,

    /// Optional category used for grouping and search.
    pub category: Option<String>,

    /// Units on hand. Invariant: `stock >= 0`.
    pub stock: i64,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Set by the store at insertion.
    pub created_at: DateTime<Utc>,

    /// Set by the store at insertion. No update path exists yet, so this
    /// equals `created_at` for every row today.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a product insert.
///
/// The store assigns `id`, `created_at` and `updated_at`; everything the
/// caller controls lives here.
///
/// ## Example
/// ```rust
/// use stockroom_core::NewProduct;
///
/// let laptop = NewProduct::new("LAPTOP001", "Gaming Laptop", 1299.99)
///     .category("Electronics")
///     .stock(15)
///     .description("High-performance gaming laptop");
/// assert_eq!(laptop.stock, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
    /// Defaults to 0 if unspecified.
    pub stock: i64,
    pub description: Option<String>,
}

impl NewProduct {
    /// Creates a new product request with the required fields.
    ///
    /// Optional fields start empty; `stock` starts at 0.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        NewProduct {
            sku: sku.into(),
            name: name.into(),
            price,
            category: None,
            stock: 0,
            description: None,
        }
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the initial stock level.
    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// =============================================================================
// LogEntry
// =============================================================================

/// One append-only audit record: who did what, and when.
///
/// Entries are immutable and never deleted; the log table is
/// monotonically append-only. A LogEntry references a product only
/// loosely through the free-text `details` payload - no foreign key -
/// so the trail survives independent of product lifecycle changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LogEntry {
    /// Store-assigned identifier (autoincrement).
    pub id: i64,

    /// Actor who performed the action.
    pub user: String,

    /// Set by the store at insertion.
    pub timestamp: DateTime<Utc>,

    /// Action tag, e.g. "add_product".
    pub action: String,

    /// Free-form payload; JSON by convention when written by the
    /// inventory manager.
    pub details: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let p = NewProduct::new("COKE-330", "Coca-Cola 330ml", 1.5);

        assert_eq!(p.sku, "COKE-330");
        assert_eq!(p.stock, 0);
        assert!(p.category.is_none());
        assert!(p.description.is_none());
    }

    #[test]
    fn test_new_product_builder() {
        let p = NewProduct::new("LAPTOP001", "Gaming Laptop", 1299.99)
            .category("Electronics")
            .stock(15)
            .description("High-performance gaming laptop");

        assert_eq!(p.category.as_deref(), Some("Electronics"));
        assert_eq!(p.stock, 15);
        assert_eq!(p.description.as_deref(), Some("High-performance gaming laptop"));
    }
}
