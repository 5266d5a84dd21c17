//! Favorite handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use vitrina_service::dto::{FavoriteResponse, FavoriteStatusResponse, ToggleFavoriteResponse};
use vitrina_service::FavoriteService;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Favorite count response body
#[derive(Debug, Serialize)]
pub struct FavoriteCountResponse {
    pub business_id: i64,
    pub favorite_count: i64,
}

/// Toggle the acting explorer's favorite for a business.
/// Responds with the outcome and the post-toggle count.
///
/// POST /favorites/:id
pub async fn toggle_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(business_id): Path<i64>,
) -> ApiResult<Json<ToggleFavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.toggle(auth.user_id, auth.role, business_id).await?;
    Ok(Json(response))
}

/// Whether the acting explorer has this business saved
///
/// GET /favorites/:id
pub async fn favorite_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(business_id): Path<i64>,
) -> ApiResult<Json<FavoriteStatusResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.status(auth.user_id, auth.role, business_id).await?;
    Ok(Json(response))
}

/// The acting explorer's saved businesses, newest first
///
/// GET /favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FavoriteResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.list(auth.user_id, auth.role).await?;
    Ok(Json(response))
}

/// Delete one favorite (its explorer or an administrator)
///
/// DELETE /favorites/:id
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(favorite_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = FavoriteService::new(state.service_context());
    service.remove(auth.user_id, auth.role, favorite_id).await?;
    Ok(NoContent)
}

/// Current favorite count for a business
///
/// GET /businesses/:business_id/favorites/count
pub async fn favorite_count(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
) -> ApiResult<Json<FavoriteCountResponse>> {
    let service = FavoriteService::new(state.service_context());
    let favorite_count = service.count_for_business(business_id).await?;
    Ok(Json(FavoriteCountResponse {
        business_id,
        favorite_count,
    }))
}
