//! PostgreSQL implementation of FavoriteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vitrina_core::entities::{Favorite, NewAuditLog, ToggleOutcome};
use vitrina_core::error::DomainError;
use vitrina_core::traits::{FavoriteRepository, RepoResult};

use crate::models::FavoriteModel;

use super::audit_log::append_entry;
use super::error::map_db_error;

const FAVORITE_COLUMNS: &str = "id, explorer_id, business_id, saved_at";

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    /// Create a new PgFavoriteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn find_pair(&self, explorer_id: i64, business_id: i64) -> RepoResult<Option<Favorite>> {
        let result = sqlx::query_as::<_, FavoriteModel>(&format!(
            r#"
            SELECT {FAVORITE_COLUMNS} FROM favorites
            WHERE explorer_id = $1 AND business_id = $2
            "#
        ))
        .bind(explorer_id)
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Favorite::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Favorite>> {
        let result = sqlx::query_as::<_, FavoriteModel>(&format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Favorite::from))
    }

    #[instrument(skip(self, on_added, on_removed))]
    async fn toggle(
        &self,
        explorer_id: i64,
        business_id: i64,
        on_added: NewAuditLog,
        on_removed: NewAuditLog,
    ) -> RepoResult<(ToggleOutcome, i64)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The unique constraint on (explorer_id, business_id) arbitrates
        // concurrent toggles: at most one insert wins.
        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO favorites (explorer_id, business_id)
            VALUES ($1, $2)
            ON CONFLICT (explorer_id, business_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(explorer_id)
        .bind(business_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let outcome = match inserted {
            Some(id) => {
                let entry = on_added.on(id);
                append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;
                ToggleOutcome::Added
            }
            None => {
                let deleted = sqlx::query_scalar::<_, i64>(
                    r#"
                    DELETE FROM favorites
                    WHERE explorer_id = $1 AND business_id = $2
                    RETURNING id
                    "#,
                )
                .bind(explorer_id)
                .bind(business_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

                // A concurrent toggle may have removed the row between our
                // insert attempt and the delete; either way the pair is gone.
                let entry = match deleted {
                    Some(id) => on_removed.on(id),
                    None => on_removed,
                };
                append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;
                ToggleOutcome::Removed
            }
        };

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM favorites WHERE business_id = $1",
        )
        .bind(business_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok((outcome, count))
    }

    #[instrument(skip(self, audit))]
    async fn remove(&self, id: i64, audit: NewAuditLog) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FavoriteNotFound(id));
        }

        let entry = audit.on(id);
        append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for_explorer(&self, explorer_id: i64) -> RepoResult<Vec<Favorite>> {
        let results = sqlx::query_as::<_, FavoriteModel>(&format!(
            r#"
            SELECT {FAVORITE_COLUMNS} FROM favorites
            WHERE explorer_id = $1
            ORDER BY saved_at DESC, id DESC
            "#
        ))
        .bind(explorer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Favorite::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_for_business(&self, business_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorites WHERE business_id = $1")
            .bind(business_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgFavoriteRepository>();
    }
}
