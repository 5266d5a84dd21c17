//! Visit database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for visits table
#[derive(Debug, Clone, FromRow)]
pub struct VisitModel {
    pub id: i64,
    pub business_id: i64,
    pub explorer_id: Option<i64>,
    pub visited_at: DateTime<Utc>,
    pub kind: String,
}
