//! Audit log repository implementation

use async_trait::async_trait;

use herald_core::entities::AuditEntry;
use herald_core::traits::{AuditLogRepository, RepoResult};

use crate::memory::MemoryStore;

#[async_trait]
impl AuditLogRepository for MemoryStore {
    async fn append(&self, entry: &AuditEntry) -> RepoResult<()> {
        self.inner.audit_log.write().push(entry.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> RepoResult<Vec<AuditEntry>> {
        let log = self.inner.audit_log.read();
        Ok(log.iter().rev().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_append_and_recent() {
        let store = MemoryStore::new();
        for i in 0..3 {
            let entry = AuditEntry::new(
                format!("a{i}"),
                "admin1",
                "Admin",
                "mute_user",
                "user",
                format!("u{i}"),
                json!({}),
            );
            store.append(&entry).await.unwrap();
        }

        let recent = store.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "a2");
        assert_eq!(recent[1].id, "a1");
    }
}
