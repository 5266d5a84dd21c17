//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{admin, auth, businesses, favorites, health, profiles, stats, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(profile_routes())
        .merge(business_routes())
        .merge(favorite_routes())
        .merge(visit_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me", get(users::get_current_user))
}

/// Explorer and owner profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/explorers/:explorer_id", get(profiles::get_explorer))
        .route("/explorers/:explorer_id", put(profiles::update_explorer))
        .route("/owners/:owner_id", get(profiles::get_owner))
        .route("/owners/:owner_id", put(profiles::update_owner))
}

/// Business routes
fn business_routes() -> Router<AppState> {
    Router::new()
        .route("/businesses", get(businesses::list_businesses))
        .route("/businesses", post(businesses::create_business))
        .route("/businesses/@me", get(businesses::get_own_business))
        .route(
            "/businesses/recommendations",
            get(businesses::recommendations),
        )
        .route(
            "/businesses/classification/:classification",
            get(businesses::by_classification),
        )
        .route("/businesses/:business_id", get(businesses::get_business))
        .route("/businesses/:business_id", put(businesses::update_business))
        .route(
            "/businesses/:business_id/favorites/count",
            get(favorites::favorite_count),
        )
        .route(
            "/businesses/:business_id/stats/daily",
            get(stats::daily_stats),
        )
        .route(
            "/businesses/:business_id/stats/weekly",
            get(stats::weekly_stats),
        )
}

/// Favorite routes.
///
/// The `:id` segment is a business id for GET/POST (membership is keyed by
/// the pair) and a favorite id for DELETE.
fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(favorites::list_favorites))
        .route("/favorites/:id", get(favorites::favorite_status))
        .route("/favorites/:id", post(favorites::toggle_favorite))
        .route("/favorites/:id", delete(favorites::remove_favorite))
}

/// Visit routes
fn visit_routes() -> Router<AppState> {
    Router::new().route("/visits", post(stats::record_visit))
}

/// Administrator routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/activity", get(admin::recent_activity))
        .route("/admin/favorites", get(admin::favorites_activity))
        .route("/admin/users/:user_id", delete(admin::delete_user))
}
