//! Visit recording and statistics handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use vitrina_service::dto::{HistogramResponse, RecordVisitRequest, VisitResponse};
use vitrina_service::VisitService;

use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Weekly statistics query parameters
#[derive(Debug, Deserialize)]
pub struct WeeklyStatsParams {
    /// Spanish weekday label, "Lunes" through "Domingo"
    pub day: String,
}

/// Record one click-through visit. Works for anonymous visitors; an
/// authenticated explorer's profile is attached to the event.
///
/// POST /visits
pub async fn record_visit(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Json(request): Json<RecordVisitRequest>,
) -> ApiResult<Created<Json<VisitResponse>>> {
    let service = VisitService::new(state.service_context());
    let response = service.record(auth.actor(), request.business_id).await?;
    Ok(Created(Json(response)))
}

/// Visits-per-weekday histogram (business owner or administrator)
///
/// GET /businesses/:business_id/stats/daily
pub async fn daily_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(business_id): Path<i64>,
) -> ApiResult<Json<HistogramResponse>> {
    let service = VisitService::new(state.service_context());
    let response = service
        .daily_stats(auth.user_id, auth.role, business_id)
        .await?;
    Ok(Json(response))
}

/// Ten-week history of visits on one weekday (business owner or
/// administrator)
///
/// GET /businesses/:business_id/stats/weekly?day=Lunes
pub async fn weekly_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(business_id): Path<i64>,
    Query(params): Query<WeeklyStatsParams>,
) -> ApiResult<Json<HistogramResponse>> {
    let service = VisitService::new(state.service_context());
    let response = service
        .weekly_stats(auth.user_id, auth.role, business_id, &params.day)
        .await?;
    Ok(Json(response))
}
