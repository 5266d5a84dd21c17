//! Administration service
//!
//! Dashboard aggregates, audit trail queries, and audited user deletion.
//! Every operation here requires the administrator role.

use tracing::{info, instrument};

use vitrina_core::entities::business::KNOWN_PLANS;
use vitrina_core::entities::profile::KNOWN_PREFERENCES;
use vitrina_core::entities::{audit_log::action, audit_log::entity, NewAuditLog, Role};
use vitrina_core::error::DomainError;

use crate::dto::responses::{AdminDashboardResponse, AuditLogResponse, LabelCount};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Label for preference tags outside the known set
const OTHER_PREFERENCES: &str = "Otros";

/// Administration service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Dashboard aggregates: population counts, activity totals, and the
    /// plan and preference distributions with every known label present.
    #[instrument(skip(self))]
    pub async fn dashboard(&self, actor_role: Role) -> ServiceResult<AdminDashboardResponse> {
        ensure_admin(actor_role)?;

        let user_count = self.ctx.user_repo().count().await?;
        let explorer_count = self.ctx.user_repo().count_by_role(Role::Explorer).await?;
        let owner_count = self.ctx.user_repo().count_by_role(Role::Owner).await?;

        // Activity totals match by substring so role-specific actions like
        // "Edición de Empresa" roll up under their family.
        let creation_count = self
            .ctx
            .audit_repo()
            .count_action_containing("Creación")
            .await?;
        let edition_count = self
            .ctx
            .audit_repo()
            .count_action_containing("Edición")
            .await?;
        let deletion_count = self
            .ctx
            .audit_repo()
            .count_action_containing("Eliminación")
            .await?;

        let plan_distribution = plan_distribution(self.ctx.business_repo().plan_counts().await?);
        let business_count = plan_distribution.iter().map(|p| p.count).sum();

        let preference_distribution =
            preference_distribution(self.ctx.profile_repo().preference_counts().await?);

        Ok(AdminDashboardResponse {
            user_count,
            explorer_count,
            owner_count,
            business_count,
            creation_count,
            edition_count,
            deletion_count,
            plan_distribution,
            preference_distribution,
        })
    }

    /// Most recent audit rows, newest first
    #[instrument(skip(self))]
    pub async fn recent_activity(
        &self,
        actor_role: Role,
        limit: i64,
    ) -> ServiceResult<Vec<AuditLogResponse>> {
        ensure_admin(actor_role)?;

        let entries = self.ctx.audit_repo().list_recent(limit).await?;
        Ok(entries.iter().map(AuditLogResponse::from).collect())
    }

    /// Favorite add/remove history, optionally narrowed to entries whose
    /// detail mentions the fragment (a business name, typically)
    #[instrument(skip(self))]
    pub async fn favorites_activity(
        &self,
        actor_role: Role,
        fragment: &str,
        limit: i64,
    ) -> ServiceResult<Vec<AuditLogResponse>> {
        ensure_admin(actor_role)?;

        let entries = self
            .ctx
            .audit_repo()
            .list_by_type_and_detail(entity::FAVORITE, fragment, limit)
            .await?;

        Ok(entries.iter().map(AuditLogResponse::from).collect())
    }

    /// Delete a user account. Profiles, owned businesses, favorites, and
    /// visits go with it through storage cascades; the deletion itself is
    /// audited before the rows disappear.
    #[instrument(skip(self))]
    pub async fn delete_user(
        &self,
        actor_id: i64,
        actor_role: Role,
        user_id: i64,
    ) -> ServiceResult<()> {
        ensure_admin(actor_role)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let audit = NewAuditLog::new(
            entity::USER,
            action::DELETION,
            format!(
                "Eliminación de usuario '{}' con rol {}",
                user.username, user.role
            ),
        )
        .by(actor_id)
        .on(user.id);

        self.ctx.user_repo().delete_cascade(user_id, audit).await?;

        info!(user_id, "User deleted by administrator");

        Ok(())
    }
}

fn ensure_admin(role: Role) -> Result<(), DomainError> {
    if role.is_administrator() {
        Ok(())
    } else {
        Err(DomainError::NotAnAdministrator)
    }
}

/// Fold raw plan counts into the known plan buckets, in their fixed order.
/// Plans outside the known set count as "Sin Plan" (the first bucket).
fn plan_distribution(counts: Vec<(String, i64)>) -> Vec<LabelCount> {
    let mut buckets = vec![0i64; KNOWN_PLANS.len()];
    for (plan, count) in counts {
        let slot = KNOWN_PLANS.iter().position(|p| *p == plan).unwrap_or(0);
        buckets[slot] += count;
    }

    KNOWN_PLANS
        .iter()
        .zip(buckets)
        .map(|(label, count)| LabelCount {
            label: (*label).to_string(),
            count,
        })
        .collect()
}

/// Fold raw preference counts into the known tags, in their fixed order,
/// with tags outside the set pooled into a trailing "Otros" bucket (only
/// present when non-empty).
fn preference_distribution(counts: Vec<(String, i64)>) -> Vec<LabelCount> {
    let mut buckets = vec![0i64; KNOWN_PREFERENCES.len()];
    let mut other = 0i64;

    for (preference, count) in counts {
        match KNOWN_PREFERENCES.iter().position(|p| *p == preference) {
            Some(slot) => buckets[slot] += count,
            None => other += count,
        }
    }

    let mut distribution: Vec<LabelCount> = KNOWN_PREFERENCES
        .iter()
        .zip(buckets)
        .map(|(label, count)| LabelCount {
            label: (*label).to_string(),
            count,
        })
        .collect();

    if other > 0 {
        distribution.push(LabelCount {
            label: OTHER_PREFERENCES.to_string(),
            count: other,
        });
    }

    distribution
}
