//! Backfill job
//!
//! HTTP-invoked, idempotent: pages through users and fills the `last_seen`
//! field only where it is missing. Safe to run any number of times.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Page size for user listing.
const BACKFILL_PAGE: usize = 300;

/// Outcome of one backfill run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillSummary {
    pub updated: u64,
    pub timestamp: DateTime<Utc>,
}

/// Backfill service
pub struct BackfillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BackfillService<'a> {
    /// Create a new BackfillService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fill `last_seen` for every user missing it.
    #[instrument(skip(self))]
    pub async fn backfill_last_seen(&self) -> ServiceResult<BackfillSummary> {
        let now = Utc::now();
        let mut updated = 0u64;
        let mut after: Option<String> = None;

        loop {
            let page = self
                .ctx
                .user_repo()
                .list_page(after.as_deref(), BACKFILL_PAGE)
                .await?;
            if page.is_empty() {
                break;
            }

            for user in &page {
                if user.last_seen.is_none() {
                    self.ctx.user_repo().set_last_seen(&user.id, now).await?;
                    updated += 1;
                }
            }
            after = page.last().map(|user| user.id.clone());
        }

        info!(updated, "Backfilled last-seen");
        Ok(BackfillSummary {
            updated,
            timestamp: now,
        })
    }
}
