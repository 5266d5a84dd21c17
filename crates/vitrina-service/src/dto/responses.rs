//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use vitrina_core::entities::{Role, ToggleOutcome};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One labeled count in a distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Current authenticated user response (includes email and profile)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileResponse>,
}

/// Role profile, tagged by kind
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileResponse {
    Explorer(ExplorerProfileResponse),
    Owner(OwnerProfileResponse),
}

/// Explorer profile response
#[derive(Debug, Clone, Serialize)]
pub struct ExplorerProfileResponse {
    pub id: i64,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub preference: Option<String>,
}

/// Owner profile response
#[derive(Debug, Clone, Serialize)]
pub struct OwnerProfileResponse {
    pub id: i64,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

// ============================================================================
// Business Responses
// ============================================================================

/// Business listing response
#[derive(Debug, Clone, Serialize)]
pub struct BusinessResponse {
    pub id: i64,
    pub name: String,
    pub tax_id: String,
    pub classification: Option<String>,
    pub plan: String,
    pub zone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_range: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: i64,
}

// ============================================================================
// Favorite Responses
// ============================================================================

/// One saved favorite with its business
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i64,
    pub business: BusinessResponse,
    pub saved_at: DateTime<Utc>,
}

/// Outcome of a favorite toggle, with the post-toggle count so clients can
/// render the new state without a second request
#[derive(Debug, Clone, Serialize)]
pub struct ToggleFavoriteResponse {
    pub status: ToggleOutcome,
    pub favorite_count: i64,
}

/// Whether the acting explorer currently has a business saved
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteStatusResponse {
    pub business_id: i64,
    pub favorited: bool,
}

// ============================================================================
// Visit / Stats Responses
// ============================================================================

/// Recorded visit event
#[derive(Debug, Clone, Serialize)]
pub struct VisitResponse {
    pub id: i64,
    pub business_id: i64,
    pub visited_at: DateTime<Utc>,
}

/// Chart-ready histogram: aligned labels and values
#[derive(Debug, Clone, Serialize)]
pub struct HistogramResponse {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

// ============================================================================
// Audit Responses
// ============================================================================

/// One audit trail row
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub id: i64,
    pub actor_user_id: Option<i64>,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub action: String,
    pub detail: String,
    pub logged_at: DateTime<Utc>,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Admin dashboard aggregates
#[derive(Debug, Serialize)]
pub struct AdminDashboardResponse {
    pub user_count: i64,
    pub explorer_count: i64,
    pub owner_count: i64,
    pub business_count: i64,
    pub creation_count: i64,
    pub edition_count: i64,
    pub deletion_count: i64,
    pub plan_distribution: Vec<LabelCount>,
    pub preference_distribution: Vec<LabelCount>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
