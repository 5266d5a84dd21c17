//! Favorite join entity and toggle outcome

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A saved (explorer, business) pair. At most one exists per pair at any
/// time; the storage layer enforces this with a unique constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i64,
    pub explorer_id: i64,
    pub business_id: i64,
    pub saved_at: DateTime<Utc>,
}

/// Result of flipping favorite membership for a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl std::fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
