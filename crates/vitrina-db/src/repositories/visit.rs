//! PostgreSQL implementation of VisitRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use vitrina_core::entities::Visit;
use vitrina_core::traits::{NewVisit, RepoResult, VisitRepository};

use crate::models::VisitModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VisitRepository
#[derive(Clone)]
pub struct PgVisitRepository {
    pool: PgPool,
}

impl PgVisitRepository {
    /// Create a new PgVisitRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    #[instrument(skip(self))]
    async fn record(&self, visit: NewVisit) -> RepoResult<Visit> {
        let model = sqlx::query_as::<_, VisitModel>(
            r#"
            INSERT INTO visits (business_id, explorer_id, kind)
            VALUES ($1, $2, $3)
            RETURNING id, business_id, explorer_id, visited_at, kind
            "#,
        )
        .bind(visit.business_id)
        .bind(visit.explorer_id)
        .bind(&visit.kind)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Visit::from(model))
    }

    #[instrument(skip(self))]
    async fn timestamps_for_business(&self, business_id: i64) -> RepoResult<Vec<DateTime<Utc>>> {
        sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            SELECT visited_at FROM visits
            WHERE business_id = $1
            ORDER BY visited_at
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.pool)
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
        assert_send_sync::<PgVisitRepository>();
    }
}
