//! Entity to response DTO mappers

use vitrina_core::entities::{
    AuditLog, Business, ExplorerProfile, OwnerProfile, User, UserProfile, Visit,
};
use vitrina_core::Histogram;

use super::responses::{
    AuditLogResponse, BusinessResponse, CurrentUserResponse, ExplorerProfileResponse,
    HistogramResponse, OwnerProfileResponse, ProfileResponse, UserResponse, VisitResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl CurrentUserResponse {
    pub fn new(user: &User, profile: Option<&UserProfile>) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
            profile: profile.map(ProfileResponse::from),
        }
    }
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        match profile {
            UserProfile::Explorer(p) => Self::Explorer(p.into()),
            UserProfile::Owner(p) => Self::Owner(p.into()),
        }
    }
}

impl From<&ExplorerProfile> for ExplorerProfileResponse {
    fn from(profile: &ExplorerProfile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name.clone(),
            middle_name: profile.middle_name.clone(),
            last_name: profile.last_name.clone(),
            second_last_name: profile.second_last_name.clone(),
            birth_date: profile.birth_date,
            phone: profile.phone.clone(),
            preference: profile.preference.clone(),
        }
    }
}

impl From<&OwnerProfile> for OwnerProfileResponse {
    fn from(profile: &OwnerProfile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name.clone(),
            middle_name: profile.middle_name.clone(),
            last_name: profile.last_name.clone(),
            second_last_name: profile.second_last_name.clone(),
            birth_date: profile.birth_date,
            phone: profile.phone.clone(),
        }
    }
}

impl From<&Business> for BusinessResponse {
    fn from(business: &Business) -> Self {
        Self {
            id: business.id,
            name: business.name.clone(),
            tax_id: business.tax_id.clone(),
            classification: business.classification.clone(),
            plan: business.plan.clone(),
            zone: business.zone.clone(),
            location: business.location.clone(),
            description: business.description.clone(),
            url: business.url.clone(),
            price_range: business.price_range.clone(),
            image_url: business.image_url.clone(),
            owner_id: business.owner_id,
        }
    }
}

impl From<&Visit> for VisitResponse {
    fn from(visit: &Visit) -> Self {
        Self {
            id: visit.id,
            business_id: visit.business_id,
            visited_at: visit.visited_at,
        }
    }
}

impl From<&AuditLog> for AuditLogResponse {
    fn from(entry: &AuditLog) -> Self {
        Self {
            id: entry.id,
            actor_user_id: entry.actor_user_id,
            entity_type: entry.entity_type.clone(),
            entity_id: entry.entity_id,
            action: entry.action.clone(),
            detail: entry.detail.clone(),
            logged_at: entry.logged_at,
        }
    }
}

impl From<Histogram> for HistogramResponse {
    fn from(histogram: Histogram) -> Self {
        Self {
            labels: histogram.labels,
            values: histogram.values,
        }
    }
}
