//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Error Types                        │
//! │                                                         │
//! │  stockroom-core errors (this file)                      │
//! │  └── ValidationError  - Input validation failures       │
//! │                                                         │
//! │  stockroom-db errors (separate crate)                   │
//! │  └── DbError          - Database operation failures     │
//! │                                                         │
//! │  stockroom errors (facade crate)                        │
//! │  └── InventoryError   - What callers see                │
//! │                                                         │
//! │  Flow: ValidationError → InventoryError → Caller        │
//! │        DbError         → InventoryError → Caller        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// They are raised at the manager boundary BEFORE any persistence
/// attempt, so a validation failure never leaves partial writes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A numeric field that must be non-negative is negative.
    ///
    /// ## When This Occurs
    /// - `price < 0`
    /// - `stock < 0`
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
