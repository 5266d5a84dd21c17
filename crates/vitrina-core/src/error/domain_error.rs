//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Explorer profile not found: {0}")]
    ExplorerNotFound(i64),

    #[error("Owner profile not found: {0}")]
    OwnerNotFound(i64),

    #[error("Business not found: {0}")]
    BusinessNotFound(i64),

    #[error("Favorite not found: {0}")]
    FavoriteNotFound(i64),

    #[error("User {0} has no profile for their role")]
    ProfileNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Formato de fecha inválido ('{0}'). Usa AAAA-MM-DD.")]
    InvalidDate(String),

    #[error("Unknown weekday: {0}")]
    InvalidWeekday(String),

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Operation requires an explorer account")]
    NotAnExplorer,

    #[error("Operation requires an owner account")]
    NotAnOwner,

    #[error("Operation requires an administrator account")]
    NotAnAdministrator,

    #[error("Favorite belongs to another explorer")]
    NotFavoriteOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already registered")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Tax id already registered")]
    TaxIdTaken,

    #[error("Owner already has a registered business")]
    BusinessAlreadyRegistered,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ExplorerNotFound(_) => "UNKNOWN_EXPLORER",
            Self::OwnerNotFound(_) => "UNKNOWN_OWNER",
            Self::BusinessNotFound(_) => "UNKNOWN_BUSINESS",
            Self::FavoriteNotFound(_) => "UNKNOWN_FAVORITE",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidWeekday(_) => "INVALID_WEEKDAY",
            Self::InvalidRole(_) => "INVALID_ROLE",

            // Authorization
            Self::NotAnExplorer => "NOT_AN_EXPLORER",
            Self::NotAnOwner => "NOT_AN_OWNER",
            Self::NotAnAdministrator => "NOT_AN_ADMINISTRATOR",
            Self::NotFavoriteOwner => "NOT_FAVORITE_OWNER",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::TaxIdTaken => "TAX_ID_TAKEN",
            Self::BusinessAlreadyRegistered => "BUSINESS_ALREADY_REGISTERED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ExplorerNotFound(_)
                | Self::OwnerNotFound(_)
                | Self::BusinessNotFound(_)
                | Self::FavoriteNotFound(_)
                | Self::ProfileNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidDate(_)
                | Self::InvalidWeekday(_)
                | Self::InvalidRole(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAnExplorer
                | Self::NotAnOwner
                | Self::NotAnAdministrator
                | Self::NotFavoriteOwner
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken
                | Self::EmailTaken
                | Self::TaxIdTaken
                | Self::BusinessAlreadyRegistered
        )
    }
}
