//! Favorite service
//!
//! Explorers save and unsave businesses through a single toggle operation.
//! The toggle answers with the outcome and the business's post-toggle
//! favorite count so clients never need a follow-up count request.

use tracing::{info, instrument};

use vitrina_core::entities::{audit_log::action, audit_log::entity, NewAuditLog, Role};
use vitrina_core::error::DomainError;

use crate::dto::responses::{
    BusinessResponse, FavoriteResponse, FavoriteStatusResponse, ToggleFavoriteResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the acting explorer's favorite for a business.
    ///
    /// Both audit entries are built up front; the repository records
    /// whichever one matches the outcome, atomically with the flip.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        actor_id: i64,
        actor_role: Role,
        business_id: i64,
    ) -> ServiceResult<ToggleFavoriteResponse> {
        let explorer_id = self.explorer_profile_id(actor_id, actor_role).await?;

        let business = self
            .ctx
            .business_repo()
            .find_by_id(business_id)
            .await?
            .ok_or(DomainError::BusinessNotFound(business_id))?;

        let on_added = NewAuditLog::new(
            entity::FAVORITE,
            action::FAVORITE_ADDED,
            format!("Favorito agregado: empresa '{}'", business.name),
        )
        .by(actor_id);

        let on_removed = NewAuditLog::new(
            entity::FAVORITE,
            action::FAVORITE_REMOVED,
            format!("Favorito eliminado: empresa '{}'", business.name),
        )
        .by(actor_id);

        let (status, favorite_count) = self
            .ctx
            .favorite_repo()
            .toggle(explorer_id, business_id, on_added, on_removed)
            .await?;

        info!(
            explorer_id,
            business_id,
            outcome = status.as_str(),
            favorite_count,
            "Favorite toggled"
        );

        Ok(ToggleFavoriteResponse {
            status,
            favorite_count,
        })
    }

    /// Whether the acting explorer currently has this business saved
    #[instrument(skip(self))]
    pub async fn status(
        &self,
        actor_id: i64,
        actor_role: Role,
        business_id: i64,
    ) -> ServiceResult<FavoriteStatusResponse> {
        let explorer_id = self.explorer_profile_id(actor_id, actor_role).await?;

        if self
            .ctx
            .business_repo()
            .find_by_id(business_id)
            .await?
            .is_none()
        {
            return Err(DomainError::BusinessNotFound(business_id).into());
        }

        let favorited = self
            .ctx
            .favorite_repo()
            .find_pair(explorer_id, business_id)
            .await?
            .is_some();

        Ok(FavoriteStatusResponse {
            business_id,
            favorited,
        })
    }

    /// The acting explorer's saved businesses, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        actor_id: i64,
        actor_role: Role,
    ) -> ServiceResult<Vec<FavoriteResponse>> {
        let explorer_id = self.explorer_profile_id(actor_id, actor_role).await?;

        let favorites = self
            .ctx
            .favorite_repo()
            .list_for_explorer(explorer_id)
            .await?;

        // Favorites referencing a business deleted mid-listing are skipped
        // rather than failing the whole response.
        let mut responses = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            if let Some(business) = self
                .ctx
                .business_repo()
                .find_by_id(favorite.business_id)
                .await?
            {
                responses.push(FavoriteResponse {
                    id: favorite.id,
                    business: BusinessResponse::from(&business),
                    saved_at: favorite.saved_at,
                });
            }
        }

        Ok(responses)
    }

    /// Delete one favorite by id. Allowed for the favorite's explorer and
    /// for administrators.
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        actor_id: i64,
        actor_role: Role,
        favorite_id: i64,
    ) -> ServiceResult<()> {
        let favorite = self
            .ctx
            .favorite_repo()
            .find_by_id(favorite_id)
            .await?
            .ok_or(DomainError::FavoriteNotFound(favorite_id))?;

        if !actor_role.is_administrator() {
            let explorer_id = self.explorer_profile_id(actor_id, actor_role).await?;
            if favorite.explorer_id != explorer_id {
                return Err(DomainError::NotFavoriteOwner.into());
            }
        }

        let detail = match self
            .ctx
            .business_repo()
            .find_by_id(favorite.business_id)
            .await?
        {
            Some(business) => format!("Favorito eliminado: empresa '{}'", business.name),
            None => format!("Favorito eliminado: empresa {}", favorite.business_id),
        };

        let audit =
            NewAuditLog::new(entity::FAVORITE, action::FAVORITE_REMOVED, detail).by(actor_id);

        self.ctx.favorite_repo().remove(favorite_id, audit).await?;

        info!(favorite_id, "Favorite removed");

        Ok(())
    }

    /// Current favorite count for a business
    #[instrument(skip(self))]
    pub async fn count_for_business(&self, business_id: i64) -> ServiceResult<i64> {
        if self
            .ctx
            .business_repo()
            .find_by_id(business_id)
            .await?
            .is_none()
        {
            return Err(DomainError::BusinessNotFound(business_id).into());
        }

        Ok(self
            .ctx
            .favorite_repo()
            .count_for_business(business_id)
            .await?)
    }

    /// Resolve the acting user's explorer profile id, rejecting other roles
    async fn explorer_profile_id(&self, actor_id: i64, actor_role: Role) -> ServiceResult<i64> {
        if !actor_role.is_explorer() {
            return Err(DomainError::NotAnExplorer.into());
        }

        let profile = self
            .ctx
            .profile_repo()
            .find_for_user(actor_id, Role::Explorer)
            .await?
            .ok_or(DomainError::ProfileNotFound(actor_id))?;

        profile
            .as_explorer()
            .map(|p| p.id)
            .ok_or_else(|| ServiceError::from(DomainError::NotAnExplorer))
    }
}
