//! Visit service
//!
//! Records click-through visit events and serves the owner dashboard's
//! daily and weekly histograms. The histogram math (including the synthetic
//! fallbacks for sparse data) lives in the domain layer; this service only
//! authorizes, fetches timestamps, and supplies the randomness.

use chrono::Utc;
use rand::thread_rng;
use tracing::{info, instrument};

use vitrina_core::entities::visit::VISIT_KIND_CLICK;
use vitrina_core::entities::Role;
use vitrina_core::error::DomainError;
use vitrina_core::stats::{daily_histogram, weekday_index, weekly_histogram};
use vitrina_core::traits::NewVisit;

use crate::dto::responses::{HistogramResponse, VisitResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Visit service
pub struct VisitService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VisitService<'a> {
    /// Create a new VisitService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record one click visit to a business.
    ///
    /// The explorer id is attached when the actor is an authenticated
    /// explorer with a profile; anyone else records an anonymous visit.
    #[instrument(skip(self))]
    pub async fn record(
        &self,
        actor: Option<(i64, Role)>,
        business_id: i64,
    ) -> ServiceResult<VisitResponse> {
        if self
            .ctx
            .business_repo()
            .find_by_id(business_id)
            .await?
            .is_none()
        {
            return Err(DomainError::BusinessNotFound(business_id).into());
        }

        let explorer_id = match actor {
            Some((actor_id, role)) if role.is_explorer() => self
                .ctx
                .profile_repo()
                .find_for_user(actor_id, Role::Explorer)
                .await?
                .and_then(|p| p.as_explorer().map(|e| e.id)),
            _ => None,
        };

        let visit = self
            .ctx
            .visit_repo()
            .record(NewVisit {
                business_id,
                explorer_id,
                kind: VISIT_KIND_CLICK.to_string(),
            })
            .await?;

        info!(business_id, visit_id = visit.id, "Visit recorded");

        Ok(VisitResponse::from(&visit))
    }

    /// Visits-per-weekday histogram for a business's current data
    #[instrument(skip(self))]
    pub async fn daily_stats(
        &self,
        actor_id: i64,
        actor_role: Role,
        business_id: i64,
    ) -> ServiceResult<HistogramResponse> {
        let timestamps = self
            .authorized_timestamps(actor_id, actor_role, business_id)
            .await?;

        let histogram = daily_histogram(&timestamps, &mut thread_rng());

        Ok(HistogramResponse::from(histogram))
    }

    /// Ten-week history of visits on one weekday, oldest week first.
    /// `weekday` is the Spanish label the dashboard sends ("Lunes".."Domingo").
    #[instrument(skip(self))]
    pub async fn weekly_stats(
        &self,
        actor_id: i64,
        actor_role: Role,
        business_id: i64,
        weekday: &str,
    ) -> ServiceResult<HistogramResponse> {
        let weekday = weekday_index(weekday)
            .ok_or_else(|| DomainError::InvalidWeekday(weekday.to_string()))?;

        let timestamps = self
            .authorized_timestamps(actor_id, actor_role, business_id)
            .await?;

        let histogram = weekly_histogram(&timestamps, weekday, Utc::now(), &mut thread_rng());

        Ok(HistogramResponse::from(histogram))
    }

    /// Fetch a business's visit timestamps after checking the actor may see
    /// its statistics (its owner, or an administrator)
    async fn authorized_timestamps(
        &self,
        actor_id: i64,
        actor_role: Role,
        business_id: i64,
    ) -> ServiceResult<Vec<chrono::DateTime<Utc>>> {
        let business = self
            .ctx
            .business_repo()
            .find_by_id(business_id)
            .await?
            .ok_or(DomainError::BusinessNotFound(business_id))?;

        if !actor_role.is_administrator() {
            let profile = self
                .ctx
                .profile_repo()
                .find_for_user(actor_id, Role::Owner)
                .await?
                .ok_or(DomainError::NotAnOwner)?;

            let owner_id = profile
                .as_owner()
                .map(|p| p.id)
                .ok_or(DomainError::NotAnOwner)?;

            if business.owner_id != owner_id {
                return Err(ServiceError::permission_denied(
                    "cannot view another owner's statistics",
                ));
            }
        }

        Ok(self
            .ctx
            .visit_repo()
            .timestamps_for_business(business_id)
            .await?)
    }
}
