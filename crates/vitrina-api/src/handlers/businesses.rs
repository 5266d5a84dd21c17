//! Business listing handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use vitrina_service::dto::{BusinessResponse, CreateBusinessRequest, UpdateBusinessRequest};
use vitrina_service::BusinessService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Recommendation query parameters
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    /// Preference tag matched against classifications as a substring
    pub preference: String,
}

/// List all businesses, newest first
///
/// GET /businesses
pub async fn list_businesses(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<BusinessResponse>>> {
    let service = BusinessService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get one business by id
///
/// GET /businesses/:business_id
pub async fn get_business(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
) -> ApiResult<Json<BusinessResponse>> {
    let service = BusinessService::new(state.service_context());
    let response = service.get(business_id).await?;
    Ok(Json(response))
}

/// Businesses with a classification (case-insensitive exact match)
///
/// GET /businesses/classification/:classification
pub async fn by_classification(
    State(state): State<AppState>,
    Path(classification): Path<String>,
) -> ApiResult<Json<Vec<BusinessResponse>>> {
    let service = BusinessService::new(state.service_context());
    let response = service.by_classification(&classification).await?;
    Ok(Json(response))
}

/// Businesses recommended for a preference tag (substring classification
/// match)
///
/// GET /businesses/recommendations?preference=Comida
pub async fn recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> ApiResult<Json<Vec<BusinessResponse>>> {
    let service = BusinessService::new(state.service_context());
    let response = service.recommendations(&params.preference).await?;
    Ok(Json(response))
}

/// The acting owner's registered business
///
/// GET /businesses/@me
pub async fn get_own_business(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Option<BusinessResponse>>> {
    let service = BusinessService::new(state.service_context());
    let response = service.own_business(auth.user_id).await?;
    Ok(Json(response))
}

/// Register the acting owner's business
///
/// POST /businesses
pub async fn create_business(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBusinessRequest>,
) -> ApiResult<Created<Json<BusinessResponse>>> {
    let service = BusinessService::new(state.service_context());
    let response = service.create(auth.user_id, auth.role, request).await?;
    Ok(Created(Json(response)))
}

/// Overwrite a business (its owner or an administrator)
///
/// PUT /businesses/:business_id
pub async fn update_business(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(business_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateBusinessRequest>,
) -> ApiResult<Json<BusinessResponse>> {
    let service = BusinessService::new(state.service_context());
    let response = service
        .update(auth.user_id, auth.role, business_id, request)
        .await?;
    Ok(Json(response))
}
