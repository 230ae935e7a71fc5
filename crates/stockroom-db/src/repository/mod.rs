//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Repository Pattern Explained               │
//! │                                                         │
//! │  Inventory manager                                      │
//! │       │                                                 │
//! │       │  db.products().search("laptop")                 │
//! │       ▼                                                 │
//! │  ProductRepository                                      │
//! │  ├── insert(&self, new_product)                         │
//! │  ├── get_by_id(&self, id)                               │
//! │  ├── get_by_sku(&self, sku)                             │
//! │  └── search(&self, term)                                │
//! │       │                                                 │
//! │       │  SQL query (bound parameters)                   │
//! │       ▼                                                 │
//! │  SQLite Database                                        │
//! │                                                         │
//! │  Benefits:                                              │
//! │  • SQL is isolated in one place                         │
//! │  • Clean separation of concerns                         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product inserts, lookups and search
//! - [`log::LogRepository`] - Append-only audit trail

pub mod log;
pub mod product;

/// Escapes LIKE metacharacters in a user-supplied term.
///
/// Used by every partial-match query before the pattern is bound, so a
/// term containing `%` or `_` matches those characters literally instead
/// of altering the match structure. Queries using the result must carry
/// `ESCAPE '\'`.
pub(crate) fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("laptop"), "laptop");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
