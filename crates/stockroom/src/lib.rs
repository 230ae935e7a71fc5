//! # stockroom: Inventory-Management Data Layer
//!
//! Stockroom lets a staff user create and query product records (SKU,
//! name, price, category, stock, description) in a persistent SQLite
//! store, and records an append-only audit trail of actions taken.
//!
//! This crate is the public facade; it is an in-process library with no
//! network surface, consumed by whatever caller links against it (CLI,
//! future UI, or test harness).
//!
//! ## Components
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Stockroom Facade                     │
//! │                                                         │
//! │  Config ──────────┐                                     │
//! │  (startup only)   │                                     │
//! │                   ▼                                     │
//! │              Inventory ────► ProductRepository          │
//! │              (business       (stockroom-db)             │
//! │               rules)                                    │
//! │                   │                                     │
//! │                   └────────► AuditLog ──► LogRepository │
//! │                              (facade)     (stockroom-db)│
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use stockroom::{AddOutcome, Config, Inventory, NewProduct};
//!
//! # async fn demo() -> Result<(), stockroom::InventoryError> {
//! let config = Config::from_env()?;
//! let inventory = Inventory::open(&config).await?;
//!
//! let laptop = NewProduct::new("LAPTOP001", "Gaming Laptop", 1299.99)
//!     .category("Electronics")
//!     .stock(15);
//!
//! match inventory.add_product(laptop, "staff_john").await? {
//!     AddOutcome::Created(id) => println!("created product {id}"),
//!     AddOutcome::DuplicateSku => println!("that SKU already exists"),
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod audit;
pub mod config;
pub mod manager;

// =============================================================================
// Re-exports
// =============================================================================

pub use audit::AuditLog;
pub use config::{Config, ConfigError};
pub use manager::{AddOutcome, Inventory, InventoryError};

// Lower layers, for callers that need direct access
pub use stockroom_core::{LogEntry, NewProduct, Product, ValidationError};
pub use stockroom_db::{Database, DbConfig, DbError};
