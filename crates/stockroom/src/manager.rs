//! # Inventory Manager
//!
//! The only component enforcing business rules; mediates between
//! callers and the storage layer / audit log.
//!
//! ## Add-Product Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              add_product(new, user)                     │
//! │                                                         │
//! │  1. Validate (price >= 0, stock >= 0, sku/name set)     │
//! │       │  violation → InventoryError::Invalid            │
//! │       ▼  (raised before any write)                      │
//! │  2. Lookup SKU                                          │
//! │       │  found → AddOutcome::DuplicateSku               │
//! │       ▼  (expected conflict, not an error)              │
//! │  3. Insert row                                          │
//! │       │  UNIQUE violation → AddOutcome::DuplicateSku    │
//! │       ▼  (constraint backstops the racy pre-check)      │
//! │  4. Record audit entry ("add_product", JSON details)    │
//! │       │  failure → InventoryError::AuditFailed          │
//! │       ▼  (product row STAYS committed)                  │
//! │  5. AddOutcome::Created(id)                             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a single linear request/response; there is no
//! state machine and nothing is cached between calls.

use tracing::{info, warn};

use crate::audit::AuditLog;
use crate::config::{Config, ConfigError};
use stockroom_core::validation::validate_new_product;
use stockroom_core::{NewProduct, Product, ValidationError};
use stockroom_db::{Database, DbError, ProductRepository};

/// Action tag written to the audit trail for product creation.
pub const ACTION_ADD_PRODUCT: &str = "add_product";

/// Result of an `add_product` call that didn't fail.
///
/// A duplicate SKU is an expected business conflict, distinguished from
/// a programming error by living on the `Ok` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was inserted; carries its new store-assigned id.
    Created(i64),

    /// A product with this SKU already exists; nothing was written.
    DuplicateSku,
}

impl AddOutcome {
    /// Returns the new id, or `None` for a duplicate.
    pub fn created_id(&self) -> Option<i64> {
        match self {
            AddOutcome::Created(id) => Some(*id),
            AddOutcome::DuplicateSku => None,
        }
    }
}

/// Errors surfaced by the inventory manager.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Caller input violated a business rule. Raised before any write
    /// occurs; fully recoverable by correcting the input.
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),

    /// The storage layer failed (connection, query, migration).
    #[error(transparent)]
    Db(#[from] DbError),

    /// Configuration could not be loaded at startup.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The product row committed but its audit entry did not.
    ///
    /// The insert is NOT rolled back: the id is reported so the caller
    /// knows the product exists despite the missing trail entry.
    #[error("product {product_id} was created but the audit entry failed: {source}")]
    AuditFailed { product_id: i64, source: DbError },
}

/// Inventory manager: validation + storage + audit trail.
///
/// Holds no product state of its own; every read re-queries the store.
#[derive(Debug, Clone)]
pub struct Inventory {
    products: ProductRepository,
    audit: AuditLog,
    low_stock_threshold: i64,
}

impl Inventory {
    /// Creates an inventory manager over an already-open database.
    pub fn new(db: &Database, config: &Config) -> Self {
        Inventory {
            products: db.products(),
            audit: AuditLog::new(db.logs()),
            low_stock_threshold: config.low_stock_threshold,
        }
    }

    /// Opens the database named by `config` and builds a manager on it.
    ///
    /// Convenience for callers that don't need to hold the `Database`
    /// handle themselves.
    pub async fn open(config: &Config) -> Result<Self, InventoryError> {
        let db = Database::new(config.db_config()).await?;
        Ok(Inventory::new(&db, config))
    }

    /// Adds a product to the inventory.
    ///
    /// See the module docs for the full flow. On success exactly one
    /// product row and exactly one audit row (action `add_product`,
    /// user as supplied, JSON details with sku and name) exist.
    ///
    /// ## Returns
    /// * `Ok(AddOutcome::Created(id))` - inserted
    /// * `Ok(AddOutcome::DuplicateSku)` - SKU taken, nothing written
    /// * `Err(InventoryError::Invalid)` - validation failed, nothing written
    /// * `Err(InventoryError::AuditFailed)` - inserted but trail write failed
    pub async fn add_product(
        &self,
        new: NewProduct,
        user: &str,
    ) -> Result<AddOutcome, InventoryError> {
        validate_new_product(&new)?;

        if self.products.get_by_sku(&new.sku).await?.is_some() {
            info!(sku = %new.sku, "Duplicate SKU, insert skipped");
            return Ok(AddOutcome::DuplicateSku);
        }

        let product = match self.products.insert(&new).await {
            Ok(product) => product,
            // The pre-check above can race another writer; the UNIQUE
            // constraint is authoritative and maps to the same outcome.
            Err(e) if e.is_unique_violation() => {
                info!(sku = %new.sku, "Duplicate SKU caught by constraint");
                return Ok(AddOutcome::DuplicateSku);
            }
            Err(e) => return Err(e.into()),
        };

        let details = serde_json::json!({
            "sku": product.sku,
            "name": product.name,
        })
        .to_string();

        if let Err(source) = self
            .audit
            .record(user, ACTION_ADD_PRODUCT, Some(&details))
            .await
        {
            warn!(
                product_id = product.id,
                error = %source,
                "Product committed but audit entry failed"
            );
            return Err(InventoryError::AuditFailed {
                product_id: product.id,
                source,
            });
        }

        info!(id = product.id, sku = %product.sku, user = %user, "Product added");
        Ok(AddOutcome::Created(product.id))
    }

    /// Gets a product by id. `None` if absent.
    pub async fn get_product(&self, id: i64) -> Result<Option<Product>, InventoryError> {
        Ok(self.products.get_by_id(id).await?)
    }

    /// Gets a product by SKU. `None` if absent.
    pub async fn get_product_by_sku(&self, sku: &str) -> Result<Option<Product>, InventoryError> {
        Ok(self.products.get_by_sku(sku).await?)
    }

    /// Lists all products in insertion order.
    pub async fn all_products(&self) -> Result<Vec<Product>, InventoryError> {
        Ok(self.products.list_all().await?)
    }

    /// Searches products by name, SKU, or category substring.
    pub async fn search(&self, term: &str) -> Result<Vec<Product>, InventoryError> {
        Ok(self.products.search(term).await?)
    }

    /// Lists products below the configured low-stock threshold.
    pub async fn low_stock(&self) -> Result<Vec<Product>, InventoryError> {
        Ok(self
            .products
            .list_low_stock(self.low_stock_threshold)
            .await?)
    }

    /// The audit trail, for callers that want to read it directly.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_db::DbConfig;

    async fn inventory() -> Inventory {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        Inventory::new(&db, &Config::default())
    }

    fn laptop() -> NewProduct {
        NewProduct::new("LAPTOP001", "Gaming Laptop", 1299.99)
            .category("Electronics")
            .stock(15)
    }

    #[tokio::test]
    async fn test_add_product_end_to_end() {
        let inv = inventory().await;

        let outcome = inv.add_product(laptop(), "staff_john").await.unwrap();
        assert_eq!(outcome, AddOutcome::Created(1));

        // Every supplied field round-trips
        let product = inv.get_product(1).await.unwrap().unwrap();
        assert_eq!(product.sku, "LAPTOP001");
        assert_eq!(product.name, "Gaming Laptop");
        assert_eq!(product.price, 1299.99);
        assert_eq!(product.category.as_deref(), Some("Electronics"));
        assert_eq!(product.stock, 15);

        // Exactly one trail entry with the supplied identity
        let logs = inv.audit().recent(1).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].action, ACTION_ADD_PRODUCT);
        assert_eq!(logs[0].user, "staff_john");

        let details: serde_json::Value =
            serde_json::from_str(logs[0].details.as_deref().unwrap()).unwrap();
        assert_eq!(details["sku"], "LAPTOP001");
        assert_eq!(details["name"], "Gaming Laptop");
    }

    #[tokio::test]
    async fn test_duplicate_sku_returns_sentinel_not_error() {
        let inv = inventory().await;

        inv.add_product(laptop(), "staff_john").await.unwrap();

        let second = NewProduct::new("LAPTOP001", "Different Laptop", 899.99).stock(5);
        let outcome = inv.add_product(second, "staff_jane").await.unwrap();
        assert_eq!(outcome, AddOutcome::DuplicateSku);
        assert!(outcome.created_id().is_none());

        // Still exactly one product, and only the first add was logged
        assert_eq!(inv.all_products().await.unwrap().len(), 1);
        assert_eq!(inv.audit().recent(100).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected_before_any_write() {
        let inv = inventory().await;

        let before = inv.all_products().await.unwrap().len();

        let bad = NewProduct::new("X", "Y", -5.0).stock(1);
        let err = inv.add_product(bad, "u").await.unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Invalid(ValidationError::Negative { field: "price" })
        ));

        // No row persisted in either table
        assert_eq!(inv.all_products().await.unwrap().len(), before);
        assert!(inv.audit().recent(100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_stock_is_rejected() {
        let inv = inventory().await;

        let bad = NewProduct::new("X", "Y", 5.0).stock(-1);
        let err = inv.add_product(bad, "u").await.unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Invalid(ValidationError::Negative { field: "stock" })
        ));
    }

    #[tokio::test]
    async fn test_missing_required_fields_are_rejected() {
        let inv = inventory().await;

        let no_sku = NewProduct::new("", "Y", 5.0);
        assert!(matches!(
            inv.add_product(no_sku, "u").await.unwrap_err(),
            InventoryError::Invalid(ValidationError::Required { field: "sku" })
        ));

        let no_name = NewProduct::new("X", "   ", 5.0);
        assert!(matches!(
            inv.add_product(no_name, "u").await.unwrap_err(),
            InventoryError::Invalid(ValidationError::Required { field: "name" })
        ));
    }

    #[tokio::test]
    async fn test_audit_failure_surfaces_but_keeps_product() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let inv = Inventory::new(&db, &Config::default());

        // Sever only the audit table; products stays writable
        sqlx::query("DROP TABLE logs")
            .execute(db.pool())
            .await
            .unwrap();

        let err = inv.add_product(laptop(), "staff_john").await.unwrap_err();
        let product_id = match err {
            InventoryError::AuditFailed { product_id, .. } => product_id,
            other => panic!("expected AuditFailed, got {other:?}"),
        };
        assert_eq!(product_id, 1);

        // The insert is not rolled back: the row stays committed and
        // readable even though its trail entry was lost
        let product = inv.get_product(product_id).await.unwrap().unwrap();
        assert_eq!(product.sku, "LAPTOP001");
    }

    #[tokio::test]
    async fn test_search_passthrough() {
        let inv = inventory().await;

        inv.add_product(laptop(), "staff_john").await.unwrap();
        inv.add_product(
            NewProduct::new("MUG-01", "Coffee Mug", 7.99).category("Kitchen"),
            "staff_john",
        )
        .await
        .unwrap();

        let hits = inv.search("laptop").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku, "LAPTOP001");

        // Empty term returns everything
        assert_eq!(inv.search("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_low_stock_uses_configured_threshold() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let config = Config {
            low_stock_threshold: 10,
            ..Config::default()
        };
        let inv = Inventory::new(&db, &config);

        inv.add_product(laptop(), "u").await.unwrap(); // stock 15
        inv.add_product(NewProduct::new("PEN-01", "Pen", 0.99).stock(3), "u")
            .await
            .unwrap();

        let low = inv.low_stock().await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].sku, "PEN-01");
    }
}
