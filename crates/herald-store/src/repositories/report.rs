//! Report repository implementation

use async_trait::async_trait;

use herald_core::entities::Report;
use herald_core::traits::{ReportRepository, RepoResult};

use crate::memory::MemoryStore;

#[async_trait]
impl ReportRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Report>> {
        Ok(self.inner.reports.get(id).map(|r| r.clone()))
    }

    async fn upsert(&self, report: &Report) -> RepoResult<()> {
        self.inner.reports.insert(report.id.clone(), report.clone());
        Ok(())
    }
}
