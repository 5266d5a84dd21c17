//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateBusinessRequest, LoginRequest, RecordVisitRequest, RefreshTokenRequest,
    RegisterRequest, UpdateBusinessRequest, UpdateExplorerProfileRequest,
    UpdateOwnerProfileRequest,
};

// Re-export commonly used response types
pub use responses::{
    AdminDashboardResponse, ApiResponse, AuditLogResponse, AuthResponse, BusinessResponse,
    CurrentUserResponse, ExplorerProfileResponse, FavoriteResponse, FavoriteStatusResponse,
    HealthResponse, HistogramResponse, LabelCount, OwnerProfileResponse, ProfileResponse,
    ReadinessResponse, ToggleFavoriteResponse, UserResponse, VisitResponse,
};
