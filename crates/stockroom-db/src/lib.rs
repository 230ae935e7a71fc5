//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for the Stockroom inventory data
//! layer. It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Stockroom Data Flow                    │
//! │                                                         │
//! │  Inventory::add_product(...)                            │
//! │       │                                                 │
//! │       ▼                                                 │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │              stockroom-db (THIS CRATE)            │  │
//! │  │                                                   │  │
//! │  │  ┌────────────┐  ┌──────────────┐  ┌───────────┐  │  │
//! │  │  │  Database  │  │ Repositories │  │ Migrations│  │  │
//! │  │  │ (pool.rs)  │◄─│ (product.rs) │  │ (embedded)│  │  │
//! │  │  │            │  │ (log.rs)     │  │           │  │  │
//! │  │  └────────────┘  └──────────────┘  └───────────┘  │  │
//! │  └───────────────────────────────────────────────────┘  │
//! │       │                                                 │
//! │       ▼                                                 │
//! │  SQLite database file (products, logs)                  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, log)
//!
//! ## Security Contract
//!
//! Every query in this crate binds its parameters; no field value is ever
//! interpolated into query text. This includes the LIKE patterns used by
//! partial-match search, whose metacharacters are escaped before binding.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("path/to/stockroom.db")).await?;
//!
//! // Use repositories
//! let products = db.products().search("laptop").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::log::LogRepository;
pub use repository::product::ProductRepository;
