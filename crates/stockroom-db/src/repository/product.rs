//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Insert with store-enforced SKU uniqueness
//! - Lookups by id and SKU
//! - Case-insensitive substring search
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 How Search Works                        │
//! │                                                         │
//! │  User types: "laptop"                                   │
//! │       │                                                 │
//! │       ▼                                                 │
//! │  Term is LIKE-escaped, wrapped in %...%, and BOUND      │
//! │  (never spliced into the query text)                    │
//! │       │                                                 │
//! │       ▼                                                 │
//! │  Matched against: name, sku, category                   │
//! │                                                         │
//! │  LAPTOP001 | Gaming Laptop | Electronics  ← MATCH!      │
//! │  MOUSE-01  | Laser Mouse   | Electronics                │
//! │                                                         │
//! │  SQLite LIKE is case-insensitive for ASCII, which is    │
//! │  exactly the contract callers get.                      │
//! └─────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::escape_like;
use stockroom_core::{NewProduct, Product};

/// Columns selected by every product query, in schema order.
const PRODUCT_COLUMNS: &str =
    "id, sku, name, price, category, stock, description, created_at, updated_at";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // Search products
/// let results = repo.search("laptop").await?;
///
/// // Get by ID
/// let product = repo.get_by_id(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// The store assigns the id (autoincrement) and both timestamps.
    /// SKU uniqueness is enforced by the UNIQUE constraint on the column,
    /// not by a pre-check here, so a raced duplicate insert cannot
    /// succeed twice.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored row, including its new id
    /// * `Err(DbError::UniqueViolation)` - SKU already exists
    pub async fn insert(&self, new: &NewProduct) -> DbResult<Product> {
        debug!(sku = %new.sku, "Inserting product");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO products (sku, name, price, category, stock, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&new.sku)
        .bind(&new.name)
        .bind(new.price)
        .bind(new.category.as_deref())
        .bind(new.stock)
        .bind(new.description.as_deref())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id = %id, "Product inserted");

        // Every inserted value was bound above, so the row can be
        // reconstructed without a read-back query.
        Ok(Product {
            id,
            sku: new.sku.clone(),
            name: new.name.clone(),
            price: new.price,
            category: new.category.clone(),
            stock: new.stock,
            description: new.description.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Lists all products in insertion (id) order.
    ///
    /// Insertion order keeps results deterministic for callers that
    /// don't request a particular ordering.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found (absence is not an error)
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Gets a product by its SKU.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_sku(&self, sku: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE sku = ?1"
        ))
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Searches products by case-insensitive substring match against
    /// name, SKU, or category.
    ///
    /// An empty (or whitespace-only) term returns all products.
    ///
    /// ## Security
    /// The term is LIKE-escaped and bound as a parameter; SQL
    /// metacharacters in it match literally and can never alter the
    /// query structure.
    pub async fn search(&self, term: &str) -> DbResult<Vec<Product>> {
        let term = term.trim();

        debug!(term = %term, "Searching products");

        if term.is_empty() {
            return self.list_all().await;
        }

        let pattern = format!("%{}%", escape_like(term));

        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS} FROM products
            WHERE name LIKE ?1 ESCAPE '\'
               OR sku LIKE ?1 ESCAPE '\'
               OR category LIKE ?1 ESCAPE '\'
            ORDER BY id
            "#
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Lists products whose stock is below the given threshold.
    ///
    /// Lowest stock first, then insertion order.
    pub async fn list_low_stock(&self, threshold: i64) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE stock < ?1 ORDER BY stock, id"
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_round_trips() {
        let db = test_db().await;
        let repo = db.products();

        let new = NewProduct::new("LAPTOP001", "Gaming Laptop", 1299.99)
            .category("Electronics")
            .stock(15)
            .description("High-performance gaming laptop");

        let inserted = repo.insert(&new).await.unwrap();
        assert_eq!(inserted.id, 1);

        let fetched = repo.get_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched.sku, "LAPTOP001");
        assert_eq!(fetched.name, "Gaming Laptop");
        assert_eq!(fetched.price, 1299.99);
        assert_eq!(fetched.category.as_deref(), Some("Electronics"));
        assert_eq!(fetched.stock, 15);
        assert_eq!(
            fetched.description.as_deref(),
            Some("High-performance gaming laptop")
        );
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected_by_constraint() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&NewProduct::new("LAPTOP001", "Laptop 1", 999.99))
            .await
            .unwrap();

        let err = repo
            .insert(&NewProduct::new("LAPTOP001", "Laptop 2", 899.99))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));

        // Exactly one row with that SKU survives
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_none() {
        let db = test_db().await;
        let repo = db.products();

        assert!(repo.get_by_id(42).await.unwrap().is_none());
        assert!(repo.get_by_sku("NOPE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_uses_insertion_order() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&NewProduct::new("ZZZ", "Zebra", 1.0)).await.unwrap();
        repo.insert(&NewProduct::new("AAA", "Aardvark", 2.0)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let skus: Vec<&str> = all.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["ZZZ", "AAA"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_across_fields() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(
            &NewProduct::new("LAPTOP001", "Gaming Laptop", 1299.99).category("Electronics"),
        )
        .await
        .unwrap();
        repo.insert(&NewProduct::new("MOUSE-01", "Laser Mouse", 29.99).category("Electronics"))
            .await
            .unwrap();
        repo.insert(&NewProduct::new("MUG-01", "Coffee Mug", 7.99).category("Kitchen"))
            .await
            .unwrap();

        // Matches name
        let by_name = repo.search("laptop").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].sku, "LAPTOP001");

        // Matches SKU
        let by_sku = repo.search("mouse-0").await.unwrap();
        assert_eq!(by_sku.len(), 1);

        // Matches category
        let by_category = repo.search("ELECTRONICS").await.unwrap();
        assert_eq!(by_category.len(), 2);
    }

    #[tokio::test]
    async fn test_search_empty_term_returns_all() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&NewProduct::new("A1", "One", 1.0)).await.unwrap();
        repo.insert(&NewProduct::new("B2", "Two", 2.0)).await.unwrap();

        assert_eq!(repo.search("").await.unwrap().len(), 2);
        assert_eq!(repo.search("   ").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_treats_like_metacharacters_literally() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&NewProduct::new("SHIRT-01", "100% Cotton Shirt", 19.99))
            .await
            .unwrap();
        repo.insert(&NewProduct::new("SHIRT-02", "Polyester Shirt", 14.99))
            .await
            .unwrap();

        // "%" must match the literal percent sign, not act as a wildcard
        let results = repo.search("100%").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].sku, "SHIRT-01");

        // A bare wildcard matches nothing unless a product contains it
        assert!(repo.search("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_low_stock() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&NewProduct::new("A1", "Plenty", 1.0).stock(50))
            .await
            .unwrap();
        repo.insert(&NewProduct::new("B2", "Scarce", 2.0).stock(2))
            .await
            .unwrap();
        repo.insert(&NewProduct::new("C3", "Gone", 3.0).stock(0))
            .await
            .unwrap();

        let low = repo.list_low_stock(5).await.unwrap();
        let skus: Vec<&str> = low.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["C3", "B2"]);
    }
}
