//! # stockroom-core: Pure Domain Layer for Stockroom
//!
//! This crate contains the domain types and business-rule validation for
//! the Stockroom inventory data layer, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Stockroom Architecture                  │
//! │                                                         │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │          stockroom (public facade)                │  │
//! │  │     Config ──► Inventory ──► AuditLog             │  │
//! │  └──────────────────────┬────────────────────────────┘  │
//! │                         │                               │
//! │  ┌──────────────────────▼────────────────────────────┐  │
//! │  │         ★ stockroom-core (THIS CRATE) ★           │  │
//! │  │                                                   │  │
//! │  │   ┌───────────┐        ┌────────────┐             │  │
//! │  │   │   types   │        │ validation │             │  │
//! │  │   │  Product  │        │   rules    │             │  │
//! │  │   │  LogEntry │        │   checks   │             │  │
//! │  │   └───────────┘        └────────────┘             │  │
//! │  │                                                   │  │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS           │  │
//! │  └──────────────────────┬────────────────────────────┘  │
//! │                         │                               │
//! │  ┌──────────────────────▼────────────────────────────┐  │
//! │  │            stockroom-db (Database Layer)          │  │
//! │  │       SQLite queries, migrations, repositories    │  │
//! │  └───────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, LogEntry)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Product` instead of
// `use stockroom_core::types::Product`

pub use error::ValidationError;
pub use types::{LogEntry, NewProduct, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum SKU length accepted by validation.
///
/// ## Business Reason
/// SKUs are human-assigned identifiers; anything longer is almost
/// certainly a paste error.
pub const MAX_SKU_LEN: usize = 50;

/// Maximum product name length accepted by validation.
pub const MAX_NAME_LEN: usize = 200;
