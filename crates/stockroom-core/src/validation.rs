//! # Validation Module
//!
//! Input validation for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Validation Layers                      │
//! │                                                         │
//! │  Layer 1: Inventory manager (Rust)                      │
//! │  ├── THIS MODULE: business rule validation              │
//! │  └── Raised before any write occurs                     │
//! │           │                                             │
//! │           ▼                                             │
//! │  Layer 2: Database (SQLite)                             │
//! │  ├── NOT NULL constraints                               │
//! │  └── UNIQUE constraint on sku                           │
//! │                                                         │
//! │  Defense in depth: the UNIQUE constraint still holds    │
//! │  if the manager's duplicate pre-check races.            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_sku, validate_price};
//!
//! // Validate before database insert
//! validate_sku("LAPTOP001").unwrap();
//! validate_price(1299.99).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::NewProduct;
use crate::{MAX_NAME_LEN, MAX_SKU_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty (whitespace-only counts as empty)
/// - Must be at most 50 characters
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_sku;
///
/// assert!(validate_sku("LAPTOP001").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku(&"A".repeat(100)).is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required { field: "sku" });
    }

    if sku.len() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku",
            max: MAX_SKU_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (`>= 0`)
/// - Zero is allowed (free items)
/// - NaN is rejected (it satisfies no ordering, so it would slip past a
///   plain `< 0.0` check)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !(price >= 0.0) {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (`>= 0`)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative { field: "stock" });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every caller-controlled field of a product insert.
///
/// First failing rule wins; checks run in field order (sku, name, price,
/// stock). This runs before the duplicate-SKU lookup so invalid input
/// never reaches the database at all.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_sku(&product.sku)?;
    validate_name(&product.name)?;
    validate_price(product.price)?;
    validate_stock(product.stock)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
