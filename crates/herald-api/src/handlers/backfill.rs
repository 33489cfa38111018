//! Backfill handler

use axum::{extract::State, Json};
use herald_service::{BackfillResponse, BackfillService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Fill `last_seen` for users missing it; idempotent
///
/// POST /backfill/last-seen
pub async fn backfill_last_seen(
    State(state): State<AppState>,
) -> ApiResult<Json<BackfillResponse>> {
    let summary = BackfillService::new(state.service_context())
        .backfill_last_seen()
        .await?;
    Ok(Json(BackfillResponse::from(summary)))
}
