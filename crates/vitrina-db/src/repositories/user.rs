//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vitrina_core::entities::{NewAuditLog, Role, User};
use vitrina_core::error::DomainError;
use vitrina_core::traits::{NewProfile, NewUser, RepoResult, UserRepository};

use crate::models::UserModel;

use super::audit_log::append_entry;
use super::error::{map_db_error, map_unique_violation};

const USER_COLUMNS: &str = "id, username, email, password_hash, role, created_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 OR email = $1"
        ))
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn username_or_email_exists(&self, username: &str, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash, audit))]
    async fn create(
        &self,
        user: NewUser,
        password_hash: &str,
        profile: Option<NewProfile>,
        audit: NewAuditLog,
    ) -> RepoResult<User> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, UserModel>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.role.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, |constraint| match constraint {
                Some("users_email_key") => DomainError::EmailTaken,
                _ => DomainError::UsernameTaken,
            })
        })?;

        match profile {
            Some(NewProfile::Explorer(p)) => {
                sqlx::query(
                    r#"
                    INSERT INTO explorer_profiles
                        (user_id, first_name, middle_name, last_name, second_last_name,
                         birth_date, phone, preference)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    "#,
                )
                .bind(model.id)
                .bind(&p.first_name)
                .bind(&p.middle_name)
                .bind(&p.last_name)
                .bind(&p.second_last_name)
                .bind(p.birth_date)
                .bind(&p.phone)
                .bind(&p.preference)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            Some(NewProfile::Owner(p)) => {
                sqlx::query(
                    r#"
                    INSERT INTO owner_profiles
                        (user_id, first_name, middle_name, last_name, second_last_name,
                         birth_date, phone)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(model.id)
                .bind(&p.first_name)
                .bind(&p.middle_name)
                .bind(&p.last_name)
                .bind(&p.second_last_name)
                .bind(p.birth_date)
                .bind(&p.phone)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            None => {}
        }

        let entry = audit.on(model.id);
        append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        User::try_from(model)
    }

    #[instrument(skip(self))]
    async fn password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT password_hash FROM users WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, audit))]
    async fn delete_cascade(&self, id: i64, audit: NewAuditLog) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Profile, owned business, and that business's visits/favorites all
        // fall via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        let entry = audit.on(id);
        append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_role(&self, role: Role) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
