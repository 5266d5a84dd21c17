//! Administrator handlers
//!
//! Every endpoint here requires the administrator role; the service layer
//! enforces it.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use vitrina_service::dto::{AdminDashboardResponse, AuditLogResponse};
use vitrina_service::AdminService;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

const DEFAULT_ACTIVITY_LIMIT: i64 = 50;

/// Activity listing query parameters
#[derive(Debug, Deserialize)]
pub struct ActivityParams {
    pub limit: Option<i64>,
}

/// Favorites activity query parameters
#[derive(Debug, Deserialize)]
pub struct FavoritesActivityParams {
    /// Substring matched against the entry detail (a business name, usually)
    #[serde(default)]
    pub business: String,
    pub limit: Option<i64>,
}

/// Dashboard aggregates
///
/// GET /admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AdminDashboardResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.dashboard(auth.role).await?;
    Ok(Json(response))
}

/// Most recent audit trail rows
///
/// GET /admin/activity?limit=50
pub async fn recent_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ActivityParams>,
) -> ApiResult<Json<Vec<AuditLogResponse>>> {
    let service = AdminService::new(state.service_context());
    let limit = params.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
    let response = service.recent_activity(auth.role, limit).await?;
    Ok(Json(response))
}

/// Favorite add/remove history, filterable by business name
///
/// GET /admin/favorites?business=Huerta&limit=50
pub async fn favorites_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<FavoritesActivityParams>,
) -> ApiResult<Json<Vec<AuditLogResponse>>> {
    let service = AdminService::new(state.service_context());
    let limit = params.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
    let response = service
        .favorites_activity(auth.role, &params.business, limit)
        .await?;
    Ok(Json(response))
}

/// Delete a user account and everything cascading from it
///
/// DELETE /admin/users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_user(auth.user_id, auth.role, user_id).await?;
    Ok(NoContent)
}
