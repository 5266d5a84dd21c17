//! Favorite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for favorites table
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteModel {
    pub id: i64,
    pub explorer_id: i64,
    pub business_id: i64,
    pub saved_at: DateTime<Utc>,
}
