//! Business database model

use sqlx::FromRow;

/// Database model for businesses table
#[derive(Debug, Clone, FromRow)]
pub struct BusinessModel {
    pub id: i64,
    pub name: String,
    pub tax_id: String,
    pub classification: Option<String>,
    pub plan: String,
    pub zone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_range: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: i64,
}
