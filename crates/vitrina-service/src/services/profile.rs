//! Profile service
//!
//! Audited edits of explorer and owner profiles. The audit detail is the
//! field-by-field diff of the edit; an edit that changes nothing still logs
//! with the "Sin cambios detectados" sentinel.

use tracing::{info, instrument};

use vitrina_core::audit::{compute_diff, snapshot, Snapshot};
use vitrina_core::entities::profile::{parse_birth_date, BIRTH_DATE_FORMAT};
use vitrina_core::entities::{audit_log::action, audit_log::entity, ExplorerProfile, NewAuditLog, OwnerProfile, Role};
use vitrina_core::error::DomainError;

use crate::dto::requests::{UpdateExplorerProfileRequest, UpdateOwnerProfileRequest};
use crate::dto::responses::{ExplorerProfileResponse, OwnerProfileResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Fields watched by the explorer edit diff, in the order they are reported
const EXPLORER_WATCHED: [&str; 7] = [
    "primer_nombre",
    "segundo_nombre",
    "primer_apellido",
    "segundo_apellido",
    "fecha_nacimiento",
    "telefono",
    "preferencia",
];

/// Fields watched by the owner edit diff
const OWNER_WATCHED: [&str; 6] = [
    "primer_nombre",
    "segundo_nombre",
    "primer_apellido",
    "segundo_apellido",
    "fecha_nacimiento",
    "telefono",
];

fn explorer_snapshot(profile: &ExplorerProfile) -> Snapshot {
    snapshot([
        ("primer_nombre", profile.first_name.clone()),
        ("segundo_nombre", profile.middle_name.clone()),
        ("primer_apellido", profile.last_name.clone()),
        ("segundo_apellido", profile.second_last_name.clone()),
        (
            "fecha_nacimiento",
            profile
                .birth_date
                .map(|d| d.format(BIRTH_DATE_FORMAT).to_string()),
        ),
        ("telefono", profile.phone.clone()),
        ("preferencia", profile.preference.clone()),
    ])
}

fn owner_snapshot(profile: &OwnerProfile) -> Snapshot {
    snapshot([
        ("primer_nombre", profile.first_name.clone()),
        ("segundo_nombre", profile.middle_name.clone()),
        ("primer_apellido", profile.last_name.clone()),
        ("segundo_apellido", profile.second_last_name.clone()),
        (
            "fecha_nacimiento",
            profile
                .birth_date
                .map(|d| d.format(BIRTH_DATE_FORMAT).to_string()),
        ),
        ("telefono", profile.phone.clone()),
    ])
}

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch an explorer profile by id
    #[instrument(skip(self))]
    pub async fn explorer(&self, id: i64) -> ServiceResult<ExplorerProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_explorer(id)
            .await?
            .ok_or(DomainError::ExplorerNotFound(id))?;

        Ok(ExplorerProfileResponse::from(&profile))
    }

    /// Fetch an owner profile by id
    #[instrument(skip(self))]
    pub async fn owner(&self, id: i64) -> ServiceResult<OwnerProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_owner(id)
            .await?
            .ok_or(DomainError::OwnerNotFound(id))?;

        Ok(OwnerProfileResponse::from(&profile))
    }

    /// Overwrite an explorer profile. Allowed for the profile's own user and
    /// for administrators.
    #[instrument(skip(self, request))]
    pub async fn update_explorer(
        &self,
        actor_id: i64,
        actor_role: Role,
        explorer_id: i64,
        request: UpdateExplorerProfileRequest,
    ) -> ServiceResult<ExplorerProfileResponse> {
        let current = self
            .ctx
            .profile_repo()
            .find_explorer(explorer_id)
            .await?
            .ok_or(DomainError::ExplorerNotFound(explorer_id))?;

        if !actor_role.is_administrator() && current.user_id != actor_id {
            return Err(ServiceError::permission_denied(
                "cannot edit another explorer's profile",
            ));
        }

        let birth_date = parse_birth_date(request.birth_date.as_deref().unwrap_or(""))?;

        let updated = ExplorerProfile {
            id: current.id,
            user_id: current.user_id,
            first_name: request.first_name,
            middle_name: request.middle_name,
            last_name: request.last_name,
            second_last_name: request.second_last_name,
            birth_date,
            phone: request.phone,
            preference: request.preference,
        };

        let detail = compute_diff(
            &explorer_snapshot(&current),
            &explorer_snapshot(&updated),
            &EXPLORER_WATCHED,
        );

        let audit =
            NewAuditLog::new(entity::EXPLORER, action::EXPLORER_EDITION, detail).by(actor_id);

        self.ctx
            .profile_repo()
            .update_explorer(&updated, audit)
            .await?;

        info!(explorer_id, "Explorer profile updated");

        Ok(ExplorerProfileResponse::from(&updated))
    }

    /// Overwrite an owner profile. Allowed for the profile's own user and
    /// for administrators.
    #[instrument(skip(self, request))]
    pub async fn update_owner(
        &self,
        actor_id: i64,
        actor_role: Role,
        owner_id: i64,
        request: UpdateOwnerProfileRequest,
    ) -> ServiceResult<OwnerProfileResponse> {
        let current = self
            .ctx
            .profile_repo()
            .find_owner(owner_id)
            .await?
            .ok_or(DomainError::OwnerNotFound(owner_id))?;

        if !actor_role.is_administrator() && current.user_id != actor_id {
            return Err(ServiceError::permission_denied(
                "cannot edit another owner's profile",
            ));
        }

        let birth_date = parse_birth_date(request.birth_date.as_deref().unwrap_or(""))?;

        let updated = OwnerProfile {
            id: current.id,
            user_id: current.user_id,
            first_name: request.first_name,
            middle_name: request.middle_name,
            last_name: request.last_name,
            second_last_name: request.second_last_name,
            birth_date,
            phone: request.phone,
        };

        let detail = compute_diff(
            &owner_snapshot(&current),
            &owner_snapshot(&updated),
            &OWNER_WATCHED,
        );

        let audit = NewAuditLog::new(entity::OWNER, action::OWNER_EDITION, detail).by(actor_id);

        self.ctx.profile_repo().update_owner(&updated, audit).await?;

        info!(owner_id, "Owner profile updated");

        Ok(OwnerProfileResponse::from(&updated))
    }
}
