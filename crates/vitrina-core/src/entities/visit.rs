//! Visit event entity

use chrono::{DateTime, Utc};

/// Kind recorded when an explorer clicks through to a business
pub const VISIT_KIND_CLICK: &str = "clic";

/// Append-only behavioral event. Visits are never updated, deleted by normal
/// flow, or audited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: i64,
    pub business_id: i64,
    pub explorer_id: Option<i64>,
    pub visited_at: DateTime<Utc>,
    pub kind: String,
}
