//! PostgreSQL implementation of BusinessRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vitrina_core::entities::{Business, NewAuditLog};
use vitrina_core::error::DomainError;
use vitrina_core::traits::{BusinessRepository, NewBusiness, RepoResult};

use crate::models::{BusinessModel, LabelCountModel};

use super::audit_log::append_entry;
use super::error::{map_db_error, map_unique_violation};

const BUSINESS_COLUMNS: &str = "id, name, tax_id, classification, plan, zone, location, \
                                description, url, price_range, image_url, owner_id";

/// PostgreSQL implementation of BusinessRepository
#[derive(Clone)]
pub struct PgBusinessRepository {
    pool: PgPool,
}

impl PgBusinessRepository {
    /// Create a new PgBusinessRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Business>> {
        let result = sqlx::query_as::<_, BusinessModel>(&format!(
            "SELECT {BUSINESS_COLUMNS} FROM businesses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Business::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: i64) -> RepoResult<Option<Business>> {
        let result = sqlx::query_as::<_, BusinessModel>(&format!(
            "SELECT {BUSINESS_COLUMNS} FROM businesses WHERE owner_id = $1"
        ))
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Business::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Business>> {
        let results = sqlx::query_as::<_, BusinessModel>(&format!(
            "SELECT {BUSINESS_COLUMNS} FROM businesses ORDER BY id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Business::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_classification(&self, classification: &str) -> RepoResult<Vec<Business>> {
        let results = sqlx::query_as::<_, BusinessModel>(&format!(
            r#"
            SELECT {BUSINESS_COLUMNS} FROM businesses
            WHERE LOWER(classification) = LOWER($1)
            ORDER BY id DESC
            "#
        ))
        .bind(classification)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Business::from).collect())
    }

    #[instrument(skip(self))]
    async fn search_classification(&self, fragment: &str) -> RepoResult<Vec<Business>> {
        let results = sqlx::query_as::<_, BusinessModel>(&format!(
            r#"
            SELECT {BUSINESS_COLUMNS} FROM businesses
            WHERE classification ILIKE '%' || $1 || '%'
            ORDER BY id DESC
            "#
        ))
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Business::from).collect())
    }

    #[instrument(skip(self, audit))]
    async fn create(&self, business: NewBusiness, audit: NewAuditLog) -> RepoResult<Business> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, BusinessModel>(&format!(
            r#"
            INSERT INTO businesses
                (name, tax_id, classification, plan, zone, location,
                 description, url, price_range, image_url, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {BUSINESS_COLUMNS}
            "#
        ))
        .bind(&business.name)
        .bind(&business.tax_id)
        .bind(&business.classification)
        .bind(&business.plan)
        .bind(&business.zone)
        .bind(&business.location)
        .bind(&business.description)
        .bind(&business.url)
        .bind(&business.price_range)
        .bind(&business.image_url)
        .bind(business.owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, |constraint| match constraint {
                Some("businesses_owner_id_key") => DomainError::BusinessAlreadyRegistered,
                _ => DomainError::TaxIdTaken,
            })
        })?;

        let entry = audit.on(model.id);
        append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Business::from(model))
    }

    #[instrument(skip(self, audit))]
    async fn update(&self, business: &Business, audit: NewAuditLog) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE businesses
            SET name = $1, classification = $2, plan = $3, zone = $4, location = $5,
                description = $6, url = $7, price_range = $8, image_url = $9
            WHERE id = $10
            "#,
        )
        .bind(&business.name)
        .bind(&business.classification)
        .bind(&business.plan)
        .bind(&business.zone)
        .bind(&business.location)
        .bind(&business.description)
        .bind(&business.url)
        .bind(&business.price_range)
        .bind(&business.image_url)
        .bind(business.id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BusinessNotFound(business.id));
        }

        let entry = audit.on(business.id);
        append_entry(&mut *tx, &entry).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn plan_counts(&self) -> RepoResult<Vec<(String, i64)>> {
        let results = sqlx::query_as::<_, LabelCountModel>(
            r#"
            SELECT plan AS label, COUNT(*) AS count
            FROM businesses
            GROUP BY plan
            ORDER BY count DESC, label
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(|r| (r.label, r.count)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBusinessRepository>();
    }
}
