//! # Audit Log Facade
//!
//! A convenience wrapper over the database log repository.
//!
//! No business logic lives here: every call maps directly to one
//! storage call, and every `record` durably persists one row before it
//! returns. The extra value is display formatting and a stable, typed
//! surface for callers that only care about the trail.

use stockroom_core::LogEntry;
use stockroom_db::{DbResult, LogRepository};

/// Default number of entries returned by retrieval helpers.
pub const DEFAULT_LOG_LIMIT: i64 = 100;

/// Facade over the append-only audit trail.
#[derive(Debug, Clone)]
pub struct AuditLog {
    logs: LogRepository,
}

impl AuditLog {
    /// Creates a new audit-log facade over the given repository.
    pub fn new(logs: LogRepository) -> Self {
        AuditLog { logs }
    }

    /// Records one action. Persisted before returning.
    pub async fn record(
        &self,
        user: &str,
        action: &str,
        details: Option<&str>,
    ) -> DbResult<LogEntry> {
        self.logs.insert(user, action, details).await
    }

    /// Returns the most recent entries, newest first.
    pub async fn recent(&self, limit: i64) -> DbResult<Vec<LogEntry>> {
        self.logs.recent(limit).await
    }

    /// Returns entries recorded by the given user.
    pub async fn by_user(&self, user: &str, limit: i64) -> DbResult<Vec<LogEntry>> {
        self.logs.by_user(user, limit).await
    }

    /// Returns entries whose action contains the given tag.
    pub async fn by_action(&self, action: &str, limit: i64) -> DbResult<Vec<LogEntry>> {
        self.logs.by_action(action, limit).await
    }

    /// Formats one entry for display.
    ///
    /// ## Example
    /// `[2026-08-30T12:00:00+00:00] staff_john: add_product - {"sku":"LAPTOP001"}`
    pub fn format_entry(entry: &LogEntry) -> String {
        let header = format!(
            "[{}] {}: {}",
            entry.timestamp.to_rfc3339(),
            entry.user,
            entry.action
        );

        match entry.details.as_deref() {
            Some(details) if !details.is_empty() => format!("{header} - {details}"),
            _ => header,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockroom_db::{Database, DbConfig};

    async fn audit() -> AuditLog {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        AuditLog::new(db.logs())
    }

    #[tokio::test]
    async fn test_record_persists_one_row() {
        let audit = audit().await;

        audit
            .record("testuser", "test_action", Some("Test details"))
            .await
            .unwrap();

        let logs = audit.recent(DEFAULT_LOG_LIMIT).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].user, "testuser");
        assert_eq!(logs[0].action, "test_action");
    }

    #[tokio::test]
    async fn test_filters_pass_through() {
        let audit = audit().await;

        audit.record("alice", "login", None).await.unwrap();
        audit.record("bob", "add_product", None).await.unwrap();

        assert_eq!(audit.by_user("alice", 10).await.unwrap().len(), 1);
        assert_eq!(audit.by_action("product", 10).await.unwrap().len(), 1);
    }

    #[test]
    fn test_format_entry() {
        let entry = LogEntry {
            id: 1,
            user: "staff_john".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
            action: "add_product".to_string(),
            details: Some("added a laptop".to_string()),
        };

        let line = AuditLog::format_entry(&entry);
        assert_eq!(
            line,
            "[2026-08-30T12:00:00+00:00] staff_john: add_product - added a laptop"
        );

        let bare = LogEntry { details: None, ..entry };
        assert_eq!(
            AuditLog::format_entry(&bare),
            "[2026-08-30T12:00:00+00:00] staff_john: add_product"
        );
    }
}
