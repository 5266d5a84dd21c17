//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vitrina_core::entities::{ExplorerProfile, NewAuditLog, OwnerProfile, Role, UserProfile};
use vitrina_core::error::DomainError;
use vitrina_core::traits::{ProfileRepository, RepoResult};

use crate::models::{ExplorerProfileModel, LabelCountModel, OwnerProfileModel};

use super::audit_log::append_entry;
use super::error::map_db_error;

const EXPLORER_COLUMNS: &str = "id, user_id, first_name, middle_name, last_name, \
                                second_last_name, birth_date, phone, preference";
const OWNER_COLUMNS: &str = "id, user_id, first_name, middle_name, last_name, \
                             second_last_name, birth_date, phone";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_for_user(&self, user_id: i64, role: Role) -> RepoResult<Option<UserProfile>> {
        match role {
            Role::Explorer => {
                let result = sqlx::query_as::<_, ExplorerProfileModel>(&format!(
                    "SELECT {EXPLORER_COLUMNS} FROM explorer_profiles WHERE user_id = $1"
                ))
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

                Ok(result.map(|m| UserProfile::Explorer(m.into())))
            }
            Role::Owner => {
                let result = sqlx::query_as::<_, OwnerProfileModel>(&format!(
                    "SELECT {OWNER_COLUMNS} FROM owner_profiles WHERE user_id = $1"
                ))
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

                Ok(result.map(|m| UserProfile::Owner(m.into())))
            }
            // Administrators carry no profile
            Role::Administrator => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_explorer(&self, id: i64) -> RepoResult<Option<ExplorerProfile>> {
        let result = sqlx::query_as::<_, ExplorerProfileModel>(&format!(
            "SELECT {EXPLORER_COLUMNS} FROM explorer_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ExplorerProfile::from))
    }

    #[instrument(skip(self))]
    async fn find_owner(&self, id: i64) -> RepoResult<Option<OwnerProfile>> {
        let result = sqlx::query_as::<_, OwnerProfileModel>(&format!(
            "SELECT {OWNER_COLUMNS} FROM owner_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(OwnerProfile::from))
    }

    #[instrument(skip(self, audit))]
    async fn update_explorer(
        &self,
        profile: &ExplorerProfile,
        audit: NewAuditLog,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE explorer_profiles
            SET first_name = $1, middle_name = $2, last_name = $3,
                second_last_name = $4, birth_date = $5, phone = $6, preference = $7
            WHERE id = $8
            "#,
        )
        .bind(&profile.first_name)
        .bind(&profile.middle_name)
        .bind(&profile.last_name)
        .bind(&profile.second_last_name)
        .bind(profile.birth_date)
        .bind(&profile.phone)
        .bind(&profile.preference)
        .bind(profile.id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ExplorerNotFound(profile.id));
        }

        let entry = audit.on(profile.id);
        append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, audit))]
    async fn update_owner(&self, profile: &OwnerProfile, audit: NewAuditLog) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE owner_profiles
            SET first_name = $1, middle_name = $2, last_name = $3,
                second_last_name = $4, birth_date = $5, phone = $6
            WHERE id = $7
            "#,
        )
        .bind(&profile.first_name)
        .bind(&profile.middle_name)
        .bind(&profile.last_name)
        .bind(&profile.second_last_name)
        .bind(profile.birth_date)
        .bind(&profile.phone)
        .bind(profile.id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OwnerNotFound(profile.id));
        }

        let entry = audit.on(profile.id);
        append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn preference_counts(&self) -> RepoResult<Vec<(String, i64)>> {
        let results = sqlx::query_as::<_, LabelCountModel>(
            r#"
            SELECT preference AS label, COUNT(*) AS count
            FROM explorer_profiles
            WHERE preference IS NOT NULL AND preference <> ''
            GROUP BY preference
            ORDER BY count DESC, label
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(|r| (r.label, r.count)).collect())
    }
}
