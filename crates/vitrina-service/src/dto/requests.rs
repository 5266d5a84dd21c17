//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying free-form input
//! also implement `Validate`. Dates travel as strings in strict `AAAA-MM-DD`
//! form and are parsed at the service boundary.

use serde::Deserialize;
use validator::Validate;
use vitrina_core::Role;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request. Profile fields apply to the role being
/// registered; administrators carry none of them.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// "Explorador", "Emprendedor", or "Administrador"
    pub role: Role,

    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    /// Strict `AAAA-MM-DD`; empty or absent means "not provided"
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    /// Explorer preference tag (ignored for other roles)
    pub preference: Option<String>,
}

/// User login request. The identifier matches either username or email.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Identifier must not be empty"))]
    pub identifier: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Full overwrite of an explorer profile's mutable fields.
/// Absent fields clear the stored value.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateExplorerProfileRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    /// Strict `AAAA-MM-DD`; empty clears
    pub birth_date: Option<String>,
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
    pub preference: Option<String>,
}

/// Full overwrite of an owner profile's mutable fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOwnerProfileRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<String>,
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

// ============================================================================
// Business Requests
// ============================================================================

/// Create business request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBusinessRequest {
    #[validate(length(min = 1, max = 120, message = "Business name must be 1-120 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Tax id must be 1-32 characters"))]
    pub tax_id: String,

    pub classification: Option<String>,

    /// Subscription plan; defaults to "Sin Plan" when absent
    pub plan: Option<String>,

    pub zone: Option<String>,
    pub location: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,

    pub price_range: Option<String>,
    pub image_url: Option<String>,
}

/// Full overwrite of a business's mutable fields (tax id and owner are fixed)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBusinessRequest {
    #[validate(length(min = 1, max = 120, message = "Business name must be 1-120 characters"))]
    pub name: String,

    pub classification: Option<String>,
    pub plan: Option<String>,
    pub zone: Option<String>,
    pub location: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,

    pub price_range: Option<String>,
    pub image_url: Option<String>,
}

// ============================================================================
// Visit Requests
// ============================================================================

/// Record a click-through visit to a business
#[derive(Debug, Clone, Deserialize)]
pub struct RecordVisitRequest {
    pub business_id: i64,
}
