//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vitrina_core::entities::{AuditLog, NewAuditLog};
use vitrina_core::traits::{AuditLogRepository, RepoResult};

use crate::models::AuditLogModel;

use super::error::map_db_error;

/// Append one audit row on the given executor and return its id.
///
/// Repositories performing audited mutations call this inside their own
/// transaction so the mutation and the audit row commit or roll back as one.
pub(crate) async fn append_entry<'e, E>(
    executor: E,
    entry: &NewAuditLog,
) -> Result<i64, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO audit_logs (actor_user_id, entity_type, entity_id, action, detail)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(entry.actor_user_id)
    .bind(&entry.entity_type)
    .bind(entry.entity_id)
    .bind(&entry.action)
    .bind(&entry.detail)
    .fetch_one(executor)
    .await
}

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self))]
    async fn append(&self, entry: NewAuditLog) -> RepoResult<i64> {
        append_entry(&self.pool, &entry).await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<AuditLog>> {
        let limit = limit.clamp(1, 200);

        let results = sqlx::query_as::<_, AuditLogModel>(
            r#"
            SELECT id, actor_user_id, entity_type, entity_id, action, detail, logged_at
            FROM audit_logs
            ORDER BY logged_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AuditLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_type_and_detail(
        &self,
        entity_type: &str,
        fragment: &str,
        limit: i64,
    ) -> RepoResult<Vec<AuditLog>> {
        let limit = limit.clamp(1, 200);

        let results = sqlx::query_as::<_, AuditLogModel>(
            r#"
            SELECT id, actor_user_id, entity_type, entity_id, action, detail, logged_at
            FROM audit_logs
            WHERE entity_type = $1 AND detail ILIKE '%' || $2 || '%'
            ORDER BY logged_at DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(entity_type)
        .bind(fragment)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AuditLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_action_containing(&self, fragment: &str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM audit_logs WHERE action ILIKE '%' || $1 || '%'
            "#,
        )
        .bind(fragment)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
