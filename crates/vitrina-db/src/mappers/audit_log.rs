//! Audit log model -> entity mapper

use vitrina_core::entities::AuditLog;

use crate::models::AuditLogModel;

impl From<AuditLogModel> for AuditLog {
    fn from(model: AuditLogModel) -> Self {
        AuditLog {
            id: model.id,
            actor_user_id: model.actor_user_id,
            entity_type: model.entity_type,
            entity_id: model.entity_id,
            action: model.action,
            detail: model.detail,
            logged_at: model.logged_at,
        }
    }
}
