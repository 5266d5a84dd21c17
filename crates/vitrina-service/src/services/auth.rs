//! Authentication service
//!
//! Handles registration (with the role-matched profile), login by username or
//! email, token refresh, and current-user lookup.

use tracing::{info, instrument, warn};

use vitrina_common::auth::{hash_password, validate_password_strength, verify_password};
use vitrina_core::entities::{audit_log::action, audit_log::entity, NewAuditLog, Role, User};
use vitrina_core::entities::profile::parse_birth_date;
use vitrina_core::traits::{NewExplorerProfile, NewOwnerProfile, NewProfile, NewUser};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user with the profile matching their role.
    ///
    /// The user row, the profile row, and the registration audit entry commit
    /// in one transaction; a bad birth date rejects the whole request.
    #[instrument(skip(self, request), fields(username = %request.username, role = %request.role))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .username_or_email_exists(&request.username, &request.email)
            .await?
        {
            return Err(ServiceError::conflict("Username or email already registered"));
        }

        let birth_date = parse_birth_date(request.birth_date.as_deref().unwrap_or(""))?;

        let profile = match request.role {
            Role::Explorer => Some(NewProfile::Explorer(NewExplorerProfile {
                first_name: request.first_name,
                middle_name: request.middle_name,
                last_name: request.last_name,
                second_last_name: request.second_last_name,
                birth_date,
                phone: request.phone,
                preference: request.preference,
            })),
            Role::Owner => Some(NewProfile::Owner(NewOwnerProfile {
                first_name: request.first_name,
                middle_name: request.middle_name,
                last_name: request.last_name,
                second_last_name: request.second_last_name,
                birth_date,
                phone: request.phone,
            })),
            Role::Administrator => None,
        };

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let audit = NewAuditLog::new(
            entity::USER,
            action::CREATION,
            format!(
                "Registro de usuario '{}' con rol {}",
                request.username, request.role
            ),
        );

        let user = self
            .ctx
            .user_repo()
            .create(
                NewUser {
                    username: request.username,
                    email: request.email,
                    role: request.role,
                },
                &password_hash,
                profile,
                audit,
            )
            .await?;

        info!(user_id = user.id, "User registered successfully");

        self.auth_response(&user).await
    }

    /// Login with username or email
    #[instrument(skip(self, request), fields(identifier = %request.identifier))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_identifier(&request.identifier)
            .await?
            .ok_or_else(|| {
                warn!(identifier = %request.identifier, "Login failed: user not found");
                ServiceError::App(vitrina_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(vitrina_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(vitrina_common::AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        self.auth_response(&user).await
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let user_id = claims.user_id().map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        info!(user_id = user.id, "Tokens refreshed successfully");

        self.auth_response(&user).await
    }

    /// Current authenticated user with their role profile
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: i64) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let profile = self
            .ctx
            .profile_repo()
            .find_for_user(user.id, user.role)
            .await?;

        Ok(CurrentUserResponse::new(&user, profile.as_ref()))
    }

    async fn auth_response(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let profile = self
            .ctx
            .profile_repo()
            .find_for_user(user.id, user.role)
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::new(user, profile.as_ref()),
        ))
    }
}
