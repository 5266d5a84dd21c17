//! Explorer and owner profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use vitrina_service::dto::{
    ExplorerProfileResponse, OwnerProfileResponse, UpdateExplorerProfileRequest,
    UpdateOwnerProfileRequest,
};
use vitrina_service::ProfileService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get an explorer profile
///
/// GET /explorers/:explorer_id
pub async fn get_explorer(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(explorer_id): Path<i64>,
) -> ApiResult<Json<ExplorerProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.explorer(explorer_id).await?;
    Ok(Json(response))
}

/// Overwrite an explorer profile (own profile or administrator)
///
/// PUT /explorers/:explorer_id
pub async fn update_explorer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(explorer_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateExplorerProfileRequest>,
) -> ApiResult<Json<ExplorerProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service
        .update_explorer(auth.user_id, auth.role, explorer_id, request)
        .await?;
    Ok(Json(response))
}

/// Get an owner profile
///
/// GET /owners/:owner_id
pub async fn get_owner(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(owner_id): Path<i64>,
) -> ApiResult<Json<OwnerProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.owner(owner_id).await?;
    Ok(Json(response))
}

/// Overwrite an owner profile (own profile or administrator)
///
/// PUT /owners/:owner_id
pub async fn update_owner(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(owner_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateOwnerProfileRequest>,
) -> ApiResult<Json<OwnerProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service
        .update_owner(auth.user_id, auth.role, owner_id, request)
        .await?;
    Ok(Json(response))
}
