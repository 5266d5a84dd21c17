//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Helpers
// ============================================================================

async fn register(server: &TestServer, request: &RegisterRequest) -> AuthResponse {
    let response = server.post("/api/v1/auth/register", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn register_owner_with_business(server: &TestServer) -> (AuthResponse, BusinessResponse) {
    let auth = register(server, &RegisterRequest::owner()).await;
    let response = server
        .post_auth(
            "/api/v1/businesses",
            &auth.access_token,
            &CreateBusinessRequest::unique(),
        )
        .await
        .unwrap();
    let business: BusinessResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (auth, business)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_explorer_creates_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::explorer();

    let auth = register(&server, &request).await;

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "Explorador");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());

    let profile = auth.user.profile.expect("explorer must have a profile");
    assert_eq!(profile.kind, "explorer");
    assert_eq!(profile.birth_date.as_deref(), Some("1999-12-31"));
    assert_eq!(profile.preference.as_deref(), Some("Comida"));
}

#[tokio::test]
async fn test_register_administrator_has_no_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, &RegisterRequest::administrator()).await;

    assert_eq!(auth.user.role, "Administrador");
    assert!(auth.user.profile.is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::explorer();

    register(&server, &request).await;

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_malformed_birth_date() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::explorer();
    request.birth_date = Some("31/12/1999".to_string());

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_with_username_or_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::explorer();
    register(&server, &request).await;

    // By username
    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.username, request.username);

    // By email
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                identifier: request.email.clone(),
                password: request.password.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::explorer();
    register(&server, &request).await;

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                identifier: request.username.clone(),
                password: "clave-incorrecta".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token_preserves_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, &RegisterRequest::owner()).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token.clone(),
            },
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.role, "Emprendedor");
    assert!(!refreshed.access_token.is_empty());
}

#[tokio::test]
async fn test_current_user_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user_includes_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, &RegisterRequest::explorer()).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, auth.user.id);
    assert!(me.profile.is_some());
}

// ============================================================================
// Business Tests
// ============================================================================

#[tokio::test]
async fn test_owner_registers_business_with_default_plan() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_auth, business) = register_owner_with_business(&server).await;

    assert_eq!(business.plan, "Sin Plan");

    // Publicly visible
    let response = server
        .get(&format!("/api/v1/businesses/{}", business.id))
        .await
        .unwrap();
    let fetched: BusinessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.name, business.name);
}

#[tokio::test]
async fn test_explorer_cannot_register_business() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, &RegisterRequest::explorer()).await;

    let response = server
        .post_auth(
            "/api/v1/businesses",
            &auth.access_token,
            &CreateBusinessRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_owner_cannot_register_second_business() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _business) = register_owner_with_business(&server).await;

    let response = server
        .post_auth(
            "/api/v1/businesses",
            &auth.access_token,
            &CreateBusinessRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_owner_updates_own_business() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, business) = register_owner_with_business(&server).await;

    let update = UpdateBusinessRequest {
        name: business.name.clone(),
        classification: business.classification.clone(),
        plan: Some("Valvanera".to_string()),
        zone: business.zone.clone(),
        location: None,
        description: None,
        url: None,
        price_range: None,
        image_url: None,
    };

    let response = server
        .put_auth(
            &format!("/api/v1/businesses/{}", business.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: BusinessResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.plan, "Valvanera");
    assert_eq!(updated.tax_id, business.tax_id);
}

#[tokio::test]
async fn test_owner_cannot_update_another_business() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_a, business) = register_owner_with_business(&server).await;
    let (owner_b, _other) = register_owner_with_business(&server).await;

    let update = UpdateBusinessRequest {
        name: "Intruso".to_string(),
        classification: None,
        plan: None,
        zone: None,
        location: None,
        description: None,
        url: None,
        price_range: None,
        image_url: None,
    };

    let response = server
        .put_auth(
            &format!("/api/v1/businesses/{}", business.id),
            &owner_b.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_recommendations_match_classification_substring() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_auth, business) = register_owner_with_business(&server).await;

    let response = server
        .get("/api/v1/businesses/recommendations?preference=Comida")
        .await
        .unwrap();
    let businesses: Vec<BusinessResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(businesses.iter().any(|b| b.id == business.id));
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_favorite_toggle_alternates_and_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner, business) = register_owner_with_business(&server).await;
    let explorer = register(&server, &RegisterRequest::explorer()).await;

    let path = format!("/api/v1/favorites/{}", business.id);

    // First toggle adds
    let response = server
        .post_auth_empty(&path, &explorer.access_token)
        .await
        .unwrap();
    let toggled: ToggleFavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled.status, "added");
    assert_eq!(toggled.favorite_count, 1);

    // Second toggle removes
    let response = server
        .post_auth_empty(&path, &explorer.access_token)
        .await
        .unwrap();
    let toggled: ToggleFavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled.status, "removed");
    assert_eq!(toggled.favorite_count, 0);
}

#[tokio::test]
async fn test_favorite_status_tracks_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner, business) = register_owner_with_business(&server).await;
    let explorer = register(&server, &RegisterRequest::explorer()).await;

    let path = format!("/api/v1/favorites/{}", business.id);

    let response = server.get_auth(&path, &explorer.access_token).await.unwrap();
    let status: FavoriteStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.business_id, business.id);
    assert!(!status.favorited);

    server
        .post_auth_empty(&path, &explorer.access_token)
        .await
        .unwrap();

    let response = server.get_auth(&path, &explorer.access_token).await.unwrap();
    let status: FavoriteStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.favorited);
}

#[tokio::test]
async fn test_favorite_toggle_rejects_owner_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, business) = register_owner_with_business(&server).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/favorites/{}", business.id),
            &owner.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_favorite_list_and_remove() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner, business) = register_owner_with_business(&server).await;
    let explorer = register(&server, &RegisterRequest::explorer()).await;

    server
        .post_auth_empty(
            &format!("/api/v1/favorites/{}", business.id),
            &explorer.access_token,
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/favorites", &explorer.access_token)
        .await
        .unwrap();
    let favorites: Vec<FavoriteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].business.id, business.id);

    let response = server
        .delete_auth(
            &format!("/api/v1/favorites/{}", favorites[0].id),
            &explorer.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/favorites", &explorer.access_token)
        .await
        .unwrap();
    let favorites: Vec<FavoriteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_favorite_count_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner, business) = register_owner_with_business(&server).await;

    let response = server
        .get(&format!("/api/v1/businesses/{}/favorites/count", business.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Visit and Statistics Tests
// ============================================================================

#[tokio::test]
async fn test_record_visit_anonymously() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner, business) = register_owner_with_business(&server).await;

    let response = server
        .post(
            "/api/v1/visits",
            &RecordVisitRequest {
                business_id: business.id,
            },
        )
        .await
        .unwrap();
    let visit: VisitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(visit.business_id, business.id);
}

#[tokio::test]
async fn test_record_visit_unknown_business() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/visits",
            &RecordVisitRequest {
                business_id: i64::MAX,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_daily_stats_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, business) = register_owner_with_business(&server).await;

    let response = server
        .get_auth(
            &format!("/api/v1/businesses/{}/stats/daily", business.id),
            &owner.access_token,
        )
        .await
        .unwrap();
    let histogram: HistogramResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(histogram.labels.len(), 7);
    assert_eq!(histogram.values.len(), 7);
    assert_eq!(histogram.labels[0], "Lunes");
    assert_eq!(histogram.labels[6], "Domingo");
    // A fresh business has no real data; every bucket is synthetic.
    assert!(histogram.values.iter().all(|v| (5..=20).contains(v)));
}

#[tokio::test]
async fn test_weekly_stats_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, business) = register_owner_with_business(&server).await;

    let response = server
        .get_auth(
            &format!("/api/v1/businesses/{}/stats/weekly?day=Lunes", business.id),
            &owner.access_token,
        )
        .await
        .unwrap();
    let histogram: HistogramResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(histogram.labels.len(), 10);
    assert_eq!(histogram.labels.first().map(String::as_str), Some("Semana 1"));
    assert_eq!(histogram.labels.last().map(String::as_str), Some("Semana 10"));
    assert!(histogram.values.iter().all(|v| (3..=15).contains(v)));
}

#[tokio::test]
async fn test_weekly_stats_rejects_unknown_weekday() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, business) = register_owner_with_business(&server).await;

    let response = server
        .get_auth(
            &format!("/api/v1/businesses/{}/stats/weekly?day=Monday", business.id),
            &owner.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_stats_hidden_from_other_owners() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_a, business) = register_owner_with_business(&server).await;
    let (owner_b, _other) = register_owner_with_business(&server).await;

    let response = server
        .get_auth(
            &format!("/api/v1/businesses/{}/stats/daily", business.id),
            &owner_b.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_dashboard_distributions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    register_owner_with_business(&server).await;
    let admin = register(&server, &RegisterRequest::administrator()).await;

    let response = server
        .get_auth("/api/v1/admin/dashboard", &admin.access_token)
        .await
        .unwrap();
    let dashboard: AdminDashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(dashboard.user_count >= 2);
    assert!(dashboard.owner_count >= 1);
    assert!(dashboard.business_count >= 1);
    assert!(dashboard.creation_count >= 2);

    // Every known plan bucket is present, in fixed order.
    let plans: Vec<&str> = dashboard
        .plan_distribution
        .iter()
        .map(|p| p.label.as_str())
        .collect();
    assert_eq!(
        plans,
        vec!["Sin Plan", "Valvanera", "Castillo Marroquin", "Diosa chia"]
    );

    let preferences: Vec<&str> = dashboard
        .preference_distribution
        .iter()
        .map(|p| p.label.as_str())
        .collect();
    assert!(preferences.starts_with(&[
        "Comida",
        "Deportes",
        "Ocio",
        "Arte y Cultura",
        "Naturaleza",
        "Compras"
    ]));
}

#[tokio::test]
async fn test_admin_endpoints_forbidden_for_explorer() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let explorer = register(&server, &RegisterRequest::explorer()).await;

    let response = server
        .get_auth("/api/v1/admin/dashboard", &explorer.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_activity_records_registration() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let explorer = register(&server, &RegisterRequest::explorer()).await;
    let admin = register(&server, &RegisterRequest::administrator()).await;

    let response = server
        .get_auth("/api/v1/admin/activity?limit=20", &admin.access_token)
        .await
        .unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(entries.iter().any(|e| {
        e.entity_type == "Usuario"
            && e.action == "Creación"
            && e.detail.contains(&explorer.user.username)
    }));
}

#[tokio::test]
async fn test_admin_favorites_activity_filtered_by_business() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner, business) = register_owner_with_business(&server).await;
    let explorer = register(&server, &RegisterRequest::explorer()).await;
    let admin = register(&server, &RegisterRequest::administrator()).await;

    server
        .post_auth_empty(
            &format!("/api/v1/favorites/{}", business.id),
            &explorer.access_token,
        )
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/admin/favorites?business={}", business.name),
            &admin.access_token,
        )
        .await
        .unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!entries.is_empty());
    assert!(entries
        .iter()
        .all(|e| e.entity_type == "Favorito" && e.detail.contains(&business.name)));
}

#[tokio::test]
async fn test_admin_deletes_user_and_audits() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let explorer = register(&server, &RegisterRequest::explorer()).await;
    let admin = register(&server, &RegisterRequest::administrator()).await;

    let response = server
        .delete_auth(
            &format!("/api/v1/admin/users/{}", explorer.user.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The deleted user's token no longer resolves to an account.
    let response = server
        .get_auth("/api/v1/users/@me", &explorer.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/activity?limit=20", &admin.access_token)
        .await
        .unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(entries.iter().any(|e| {
        e.action == "Eliminación" && e.detail.contains(&explorer.user.username)
    }));
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_explorer_updates_own_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let explorer = register(&server, &RegisterRequest::explorer()).await;
    let profile_id = explorer.user.profile.as_ref().unwrap().id;

    let update = UpdateExplorerProfileRequest {
        first_name: Some("Ana María".to_string()),
        middle_name: None,
        last_name: Some("Rojas".to_string()),
        second_last_name: None,
        birth_date: Some("1999-12-31".to_string()),
        phone: Some("3001234567".to_string()),
        preference: Some("Deportes".to_string()),
    };

    let response = server
        .put_auth(
            &format!("/api/v1/explorers/{profile_id}"),
            &explorer.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: ExplorerProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("Ana María"));
    assert_eq!(updated.preference.as_deref(), Some("Deportes"));
}

#[tokio::test]
async fn test_explorer_cannot_update_anothers_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let victim = register(&server, &RegisterRequest::explorer()).await;
    let attacker = register(&server, &RegisterRequest::explorer()).await;
    let profile_id = victim.user.profile.as_ref().unwrap().id;

    let update = UpdateExplorerProfileRequest {
        first_name: Some("Hackeado".to_string()),
        middle_name: None,
        last_name: None,
        second_last_name: None,
        birth_date: None,
        phone: None,
        preference: None,
    };

    let response = server
        .put_auth(
            &format!("/api/v1/explorers/{profile_id}"),
            &attacker.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_profile_edit_audit_carries_field_diff() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let explorer = register(&server, &RegisterRequest::explorer()).await;
    let admin = register(&server, &RegisterRequest::administrator()).await;
    let profile_id = explorer.user.profile.as_ref().unwrap().id;

    let update = UpdateExplorerProfileRequest {
        first_name: Some("Ana".to_string()),
        middle_name: None,
        last_name: Some("Rojas".to_string()),
        second_last_name: None,
        birth_date: Some("1999-12-31".to_string()),
        phone: Some("3001234567".to_string()),
        preference: Some("Naturaleza".to_string()),
    };

    server
        .put_auth(
            &format!("/api/v1/explorers/{profile_id}"),
            &explorer.access_token,
            &update,
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/admin/activity?limit=20", &admin.access_token)
        .await
        .unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(entries.iter().any(|e| {
        e.action == "Edición de Explorador"
            && e.detail.contains("preferencia: 'Comida' → 'Naturaleza'")
    }));
}
