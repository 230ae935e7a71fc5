//! # Log Repository
//!
//! Database operations for the append-only audit trail.
//!
//! Rows in `logs` are never updated or deleted; the only write path is
//! `insert`. Retrieval is newest-first, with SQL-level filters by user
//! and by action.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::escape_like;
use stockroom_core::LogEntry;

/// Columns selected by every log query, in schema order.
const LOG_COLUMNS: &str = r#"id, user, timestamp, action, details"#;

/// Repository for audit-log database operations.
#[derive(Debug, Clone)]
pub struct LogRepository {
    pool: SqlitePool,
}

impl LogRepository {
    /// Creates a new LogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LogRepository { pool }
    }

    /// Appends one audit entry.
    ///
    /// The store assigns the id and the timestamp. The row is durably
    /// persisted before this returns.
    pub async fn insert(
        &self,
        user: &str,
        action: &str,
        details: Option<&str>,
    ) -> DbResult<LogEntry> {
        debug!(user = %user, action = %action, "Appending audit entry");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO logs (user, timestamp, action, details)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(user)
        .bind(now)
        .bind(action)
        .bind(details)
        .execute(&self.pool)
        .await?;

        Ok(LogEntry {
            id: result.last_insert_rowid(),
            user: user.to_string(),
            timestamp: now,
            action: action.to_string(),
            details: details.map(str::to_string),
        })
    }

    /// Returns the most recent entries, newest first.
    ///
    /// Ties on timestamp fall back to id so ordering stays deterministic.
    pub async fn recent(&self, limit: i64) -> DbResult<Vec<LogEntry>> {
        let entries = sqlx::query_as::<_, LogEntry>(&format!(
            "SELECT {LOG_COLUMNS} FROM logs ORDER BY timestamp DESC, id DESC LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Returns entries recorded by the given user, newest first.
    pub async fn by_user(&self, user: &str, limit: i64) -> DbResult<Vec<LogEntry>> {
        let entries = sqlx::query_as::<_, LogEntry>(&format!(
            r#"
            SELECT {LOG_COLUMNS} FROM logs
            WHERE user = ?1
            ORDER BY timestamp DESC, id DESC
            LIMIT ?2
            "#
        ))
        .bind(user)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Returns entries whose action contains the given tag, newest first.
    ///
    /// The match is a case-insensitive substring, so "product" finds both
    /// "add_product" and "delete_product". The tag is LIKE-escaped and
    /// bound like every other parameter.
    pub async fn by_action(&self, action: &str, limit: i64) -> DbResult<Vec<LogEntry>> {
        let pattern = format!("%{}%", escape_like(action));

        let entries = sqlx::query_as::<_, LogEntry>(&format!(
            r#"
            SELECT {LOG_COLUMNS} FROM logs
            WHERE action LIKE ?1 ESCAPE '\'
            ORDER BY timestamp DESC, id DESC
            LIMIT ?2
            "#
        ))
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Counts total entries (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM logs")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
