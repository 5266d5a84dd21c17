//! Business service
//!
//! Listing, lookup, and audited creation/edition of business listings.

use tracing::{info, instrument};

use vitrina_core::audit::{compute_diff, snapshot, Snapshot};
use vitrina_core::entities::business::DEFAULT_PLAN;
use vitrina_core::entities::{audit_log::action, audit_log::entity, Business, NewAuditLog, Role};
use vitrina_core::error::DomainError;
use vitrina_core::traits::NewBusiness;

use crate::dto::requests::{CreateBusinessRequest, UpdateBusinessRequest};
use crate::dto::responses::BusinessResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Fields watched by the business edit diff, in the order they are reported
const BUSINESS_WATCHED: [&str; 9] = [
    "nombre",
    "clasificacion",
    "plan",
    "zona",
    "ubicacion",
    "descripcion",
    "url",
    "rango_precios",
    "imagen",
];

fn business_snapshot(business: &Business) -> Snapshot {
    snapshot([
        ("nombre", Some(business.name.clone())),
        ("clasificacion", business.classification.clone()),
        ("plan", Some(business.plan.clone())),
        ("zona", business.zone.clone()),
        ("ubicacion", business.location.clone()),
        ("descripcion", business.description.clone()),
        ("url", business.url.clone()),
        ("rango_precios", business.price_range.clone()),
        ("imagen", business.image_url.clone()),
    ])
}

fn normalize_plan(plan: Option<String>) -> String {
    match plan {
        Some(p) if !p.trim().is_empty() => p,
        _ => DEFAULT_PLAN.to_string(),
    }
}

/// Business service
pub struct BusinessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BusinessService<'a> {
    /// Create a new BusinessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All businesses, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<BusinessResponse>> {
        let businesses = self.ctx.business_repo().list().await?;
        Ok(businesses.iter().map(BusinessResponse::from).collect())
    }

    /// One business by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<BusinessResponse> {
        let business = self
            .ctx
            .business_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BusinessNotFound(id))?;

        Ok(BusinessResponse::from(&business))
    }

    /// Businesses whose classification matches exactly (case-insensitive)
    #[instrument(skip(self))]
    pub async fn by_classification(
        &self,
        classification: &str,
    ) -> ServiceResult<Vec<BusinessResponse>> {
        let businesses = self
            .ctx
            .business_repo()
            .list_by_classification(classification)
            .await?;

        Ok(businesses.iter().map(BusinessResponse::from).collect())
    }

    /// Businesses whose classification contains the fragment, used for
    /// preference-driven recommendations
    #[instrument(skip(self))]
    pub async fn recommendations(&self, fragment: &str) -> ServiceResult<Vec<BusinessResponse>> {
        let businesses = self
            .ctx
            .business_repo()
            .search_classification(fragment)
            .await?;

        Ok(businesses.iter().map(BusinessResponse::from).collect())
    }

    /// The acting owner's registered business, if any
    #[instrument(skip(self))]
    pub async fn own_business(&self, actor_id: i64) -> ServiceResult<Option<BusinessResponse>> {
        let owner = self.owner_profile_id(actor_id).await?;
        let business = self.ctx.business_repo().find_by_owner(owner).await?;
        Ok(business.as_ref().map(BusinessResponse::from))
    }

    /// Register the acting owner's business. One per owner; the tax id must
    /// be unique. Creation is audited.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        actor_id: i64,
        actor_role: Role,
        request: CreateBusinessRequest,
    ) -> ServiceResult<BusinessResponse> {
        if !actor_role.is_owner() {
            return Err(DomainError::NotAnOwner.into());
        }

        let owner_id = self.owner_profile_id(actor_id).await?;

        if self
            .ctx
            .business_repo()
            .find_by_owner(owner_id)
            .await?
            .is_some()
        {
            return Err(DomainError::BusinessAlreadyRegistered.into());
        }

        let audit = NewAuditLog::new(
            entity::BUSINESS,
            action::BUSINESS_CREATION,
            format!("Creación de empresa '{}'", request.name),
        )
        .by(actor_id);

        let business = self
            .ctx
            .business_repo()
            .create(
                NewBusiness {
                    name: request.name,
                    tax_id: request.tax_id,
                    classification: request.classification,
                    plan: normalize_plan(request.plan),
                    zone: request.zone,
                    location: request.location,
                    description: request.description,
                    url: request.url,
                    price_range: request.price_range,
                    image_url: request.image_url,
                    owner_id,
                },
                audit,
            )
            .await?;

        info!(business_id = business.id, "Business registered");

        Ok(BusinessResponse::from(&business))
    }

    /// Overwrite a business's mutable fields. Allowed for its owner and for
    /// administrators; the audit detail is the field diff.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor_id: i64,
        actor_role: Role,
        business_id: i64,
        request: UpdateBusinessRequest,
    ) -> ServiceResult<BusinessResponse> {
        let current = self
            .ctx
            .business_repo()
            .find_by_id(business_id)
            .await?
            .ok_or(DomainError::BusinessNotFound(business_id))?;

        if !actor_role.is_administrator() {
            let owner_id = self.owner_profile_id(actor_id).await?;
            if current.owner_id != owner_id {
                return Err(ServiceError::permission_denied(
                    "cannot edit another owner's business",
                ));
            }
        }

        let updated = Business {
            id: current.id,
            name: request.name,
            tax_id: current.tax_id.clone(),
            classification: request.classification,
            plan: normalize_plan(request.plan),
            zone: request.zone,
            location: request.location,
            description: request.description,
            url: request.url,
            price_range: request.price_range,
            image_url: request.image_url,
            owner_id: current.owner_id,
        };

        let detail = compute_diff(
            &business_snapshot(&current),
            &business_snapshot(&updated),
            &BUSINESS_WATCHED,
        );

        let audit =
            NewAuditLog::new(entity::BUSINESS, action::BUSINESS_EDITION, detail).by(actor_id);

        self.ctx.business_repo().update(&updated, audit).await?;

        info!(business_id, "Business updated");

        Ok(BusinessResponse::from(&updated))
    }

    /// Resolve the acting user's owner profile id
    async fn owner_profile_id(&self, actor_id: i64) -> ServiceResult<i64> {
        let profile = self
            .ctx
            .profile_repo()
            .find_for_user(actor_id, Role::Owner)
            .await?
            .ok_or(DomainError::ProfileNotFound(actor_id))?;

        profile
            .as_owner()
            .map(|p| p.id)
            .ok_or_else(|| DomainError::NotAnOwner.into())
    }
}
