//! Generic label/count row for GROUP BY queries

use sqlx::FromRow;

/// One row of a `GROUP BY label` aggregation
#[derive(Debug, Clone, FromRow)]
pub struct LabelCountModel {
    pub label: String,
    pub count: i64,
}
