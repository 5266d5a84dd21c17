//! Audit log entity
//!
//! Audit rows are the only durable history the system keeps. They are
//! appended together with the mutation they document (same transaction) and
//! never updated or deleted afterwards.

use chrono::{DateTime, Utc};

/// Entity-type tags. Free-form text, but the dashboard and the favorites
/// audit feed filter on these exact strings.
pub mod entity {
    pub const USER: &str = "Usuario";
    pub const EXPLORER: &str = "Explorador";
    pub const OWNER: &str = "Emprendedor";
    pub const BUSINESS: &str = "Empresa";
    pub const FAVORITE: &str = "Favorito";
}

/// Action labels. The admin dashboard counts them with substring matches on
/// "Creación" / "Edición" / "Eliminación", so every label keeps one of those
/// words verbatim.
pub mod action {
    pub const CREATION: &str = "Creación";
    pub const BUSINESS_CREATION: &str = "Creación de Empresa";
    pub const BUSINESS_EDITION: &str = "Edición de Empresa";
    pub const EXPLORER_EDITION: &str = "Edición de Explorador";
    pub const OWNER_EDITION: &str = "Edición de Emprendedor";
    pub const DELETION: &str = "Eliminación";
    pub const FAVORITE_ADDED: &str = "Agregación Favorito";
    pub const FAVORITE_REMOVED: &str = "Eliminación Favorito";
}

/// Persisted audit record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLog {
    pub id: i64,
    pub actor_user_id: Option<i64>,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub action: String,
    pub detail: String,
    pub logged_at: DateTime<Utc>,
}

/// Audit record to be appended. `entity_id` is left `None` by callers that
/// create the entity in the same transaction; the repository fills it with
/// the freshly assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditLog {
    pub actor_user_id: Option<i64>,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub action: String,
    pub detail: String,
}

impl NewAuditLog {
    pub fn new(
        entity_type: impl Into<String>,
        action: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            actor_user_id: None,
            entity_type: entity_type.into(),
            entity_id: None,
            action: action.into(),
            detail: detail.into(),
        }
    }

    /// Attach the acting user
    #[must_use]
    pub fn by(mut self, actor_user_id: i64) -> Self {
        self.actor_user_id = Some(actor_user_id);
        self
    }

    /// Attach the affected entity id
    #[must_use]
    pub fn on(mut self, entity_id: i64) -> Self {
        self.entity_id = Some(entity_id);
        self
    }
}
