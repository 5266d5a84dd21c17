//! Role profile database models

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for explorer_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ExplorerProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub preference: Option<String>,
}

/// Database model for owner_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct OwnerProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
}
