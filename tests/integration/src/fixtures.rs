//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
}

impl RegisterRequest {
    /// Unique explorer registration
    pub fn explorer() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("explorador{suffix}"),
            email: format!("explorador{suffix}@example.com"),
            password: "clave12345".to_string(),
            role: "Explorador".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: Some("Rojas".to_string()),
            birth_date: Some("1999-12-31".to_string()),
            phone: Some("3001234567".to_string()),
            preference: Some("Comida".to_string()),
        }
    }

    /// Unique owner registration
    pub fn owner() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("emprendedor{suffix}"),
            email: format!("emprendedor{suffix}@example.com"),
            password: "clave12345".to_string(),
            role: "Emprendedor".to_string(),
            first_name: Some("Luis".to_string()),
            last_name: Some("Peña".to_string()),
            birth_date: None,
            phone: None,
            preference: None,
        }
    }

    /// Unique administrator registration (no profile fields)
    pub fn administrator() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("admin{suffix}"),
            email: format!("admin{suffix}@example.com"),
            password: "clave12345".to_string(),
            role: "Administrador".to_string(),
            first_name: None,
            last_name: None,
            birth_date: None,
            phone: None,
            preference: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            identifier: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
    pub profile: Option<ProfileResponse>,
}

/// Role profile, tagged by kind
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub kind: String,
    pub id: i64,
    pub first_name: Option<String>,
    pub birth_date: Option<String>,
    pub preference: Option<String>,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Create business request
#[derive(Debug, Serialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub tax_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CreateBusinessRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Negocio {suffix}"),
            tax_id: format!("900{suffix:06}-1"),
            classification: Some("Comida".to_string()),
            plan: None,
            zone: Some("Centro".to_string()),
            location: None,
            description: Some("Un negocio de prueba".to_string()),
            url: None,
            price_range: Some("$$".to_string()),
            image_url: None,
        }
    }
}

/// Update business request (full overwrite, tax id fixed)
#[derive(Debug, Serialize)]
pub struct UpdateBusinessRequest {
    pub name: String,
    pub classification: Option<String>,
    pub plan: Option<String>,
    pub zone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_range: Option<String>,
    pub image_url: Option<String>,
}

/// Business response
#[derive(Debug, Deserialize)]
pub struct BusinessResponse {
    pub id: i64,
    pub name: String,
    pub tax_id: String,
    pub classification: Option<String>,
    pub plan: String,
    pub zone: Option<String>,
    pub owner_id: i64,
}

/// Toggle favorite response
#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub status: String,
    pub favorite_count: i64,
}

/// Favorite status response
#[derive(Debug, Deserialize)]
pub struct FavoriteStatusResponse {
    pub business_id: i64,
    pub favorited: bool,
}

/// One saved favorite
#[derive(Debug, Deserialize)]
pub struct FavoriteResponse {
    pub id: i64,
    pub business: BusinessResponse,
    pub saved_at: String,
}

/// Record visit request
#[derive(Debug, Serialize)]
pub struct RecordVisitRequest {
    pub business_id: i64,
}

/// Recorded visit response
#[derive(Debug, Deserialize)]
pub struct VisitResponse {
    pub id: i64,
    pub business_id: i64,
    pub visited_at: String,
}

/// Histogram response
#[derive(Debug, Deserialize)]
pub struct HistogramResponse {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// Update explorer profile request (full overwrite)
#[derive(Debug, Serialize)]
pub struct UpdateExplorerProfileRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub preference: Option<String>,
}

/// Explorer profile response
#[derive(Debug, Deserialize)]
pub struct ExplorerProfileResponse {
    pub id: i64,
    pub first_name: Option<String>,
    pub birth_date: Option<String>,
    pub preference: Option<String>,
}

/// Admin dashboard response
#[derive(Debug, Deserialize)]
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

/// One labeled count in a distribution
#[derive(Debug, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

/// One audit trail row
#[derive(Debug, Deserialize)]
pub struct AuditLogResponse {
    pub id: i64,
    pub actor_user_id: Option<i64>,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub action: String,
    pub detail: String,
    pub logged_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
