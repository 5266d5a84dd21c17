//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// Stored as the Spanish display string ("Explorador" etc.)
    pub role: String,
    pub created_at: DateTime<Utc>,
}
