//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Methods that take a [`NewAuditLog`] are
//! audited mutations: the implementation MUST commit the mutation and the
//! audit row in one transaction, so a failed commit leaves neither behind.

use async_trait::async_trait;

use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{
    AuditLog, Business, ExplorerProfile, Favorite, NewAuditLog, OwnerProfile, Role,
    ToggleOutcome, User, UserProfile, Visit,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Insert payloads
// ============================================================================

/// New user account (password hash passed separately)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Explorer profile fields at registration
#[derive(Debug, Clone, Default)]
pub struct NewExplorerProfile {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub preference: Option<String>,
}

/// Owner profile fields at registration
#[derive(Debug, Clone, Default)]
pub struct NewOwnerProfile {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

/// Role-matched profile payload created together with the user row.
/// Administrators carry no profile.
#[derive(Debug, Clone)]
pub enum NewProfile {
    Explorer(NewExplorerProfile),
    Owner(NewOwnerProfile),
}

/// New business listing
#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub name: String,
    pub tax_id: String,
    pub classification: Option<String>,
    pub plan: String,
    pub zone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_range: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: i64,
}

/// New visit event
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub business_id: i64,
    pub explorer_id: Option<i64>,
    pub kind: String,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by username or email (login identifier)
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>>;

    /// Check whether the username or the email is already registered
    async fn username_or_email_exists(&self, username: &str, email: &str) -> RepoResult<bool>;

    /// Create user + role profile + audit row in one transaction.
    /// The audit row's entity id is set to the new user's id.
    async fn create(
        &self,
        user: NewUser,
        password_hash: &str,
        profile: Option<NewProfile>,
        audit: NewAuditLog,
    ) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Delete the user and, via storage-level cascades, their profile, any
    /// owned business, and that business's visits/favorites. All-or-nothing,
    /// audited in the same transaction.
    async fn delete_cascade(&self, id: i64, audit: NewAuditLog) -> RepoResult<()>;

    /// Total registered users
    async fn count(&self) -> RepoResult<i64>;

    /// Registered users holding the given role
    async fn count_by_role(&self, role: Role) -> RepoResult<i64>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile matching the user's role; `None` for administrators
    /// or users who never completed registration
    async fn find_for_user(&self, user_id: i64, role: Role) -> RepoResult<Option<UserProfile>>;

    /// Find explorer profile by its own id
    async fn find_explorer(&self, id: i64) -> RepoResult<Option<ExplorerProfile>>;

    /// Find owner profile by its own id
    async fn find_owner(&self, id: i64) -> RepoResult<Option<OwnerProfile>>;

    /// Overwrite an explorer profile's mutable fields, audited
    async fn update_explorer(
        &self,
        profile: &ExplorerProfile,
        audit: NewAuditLog,
    ) -> RepoResult<()>;

    /// Overwrite an owner profile's mutable fields, audited
    async fn update_owner(&self, profile: &OwnerProfile, audit: NewAuditLog) -> RepoResult<()>;

    /// Distribution of explorer preference tags (tag, count)
    async fn preference_counts(&self) -> RepoResult<Vec<(String, i64)>>;
}

// ============================================================================
// Business Repository
// ============================================================================

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find business by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Business>>;

    /// The owner's single business, if registered
    async fn find_by_owner(&self, owner_id: i64) -> RepoResult<Option<Business>>;

    /// All businesses, newest first
    async fn list(&self) -> RepoResult<Vec<Business>>;

    /// Case-insensitive exact classification match
    async fn list_by_classification(&self, classification: &str) -> RepoResult<Vec<Business>>;

    /// Case-insensitive substring classification match (recommendations)
    async fn search_classification(&self, fragment: &str) -> RepoResult<Vec<Business>>;

    /// Create a business + audit row in one transaction.
    /// The audit row's entity id is set to the new business id.
    async fn create(&self, business: NewBusiness, audit: NewAuditLog) -> RepoResult<Business>;

    /// Overwrite a business's mutable fields, audited
    async fn update(&self, business: &Business, audit: NewAuditLog) -> RepoResult<()>;

    /// Businesses per subscription plan (plan, count)
    async fn plan_counts(&self) -> RepoResult<Vec<(String, i64)>>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Find the favorite for a (explorer, business) pair
    async fn find_pair(&self, explorer_id: i64, business_id: i64) -> RepoResult<Option<Favorite>>;

    /// Find favorite by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Favorite>>;

    /// Atomically flip membership for the pair and return the outcome plus
    /// the post-toggle favorite count for the business.
    ///
    /// The implementation must rely on the storage-level unique constraint
    /// on (explorer_id, business_id): concurrent toggles never produce two
    /// rows for one pair. Whichever of `on_added` / `on_removed` applies is
    /// recorded in the same transaction.
    async fn toggle(
        &self,
        explorer_id: i64,
        business_id: i64,
        on_added: NewAuditLog,
        on_removed: NewAuditLog,
    ) -> RepoResult<(ToggleOutcome, i64)>;

    /// Delete one favorite by id, audited
    async fn remove(&self, id: i64, audit: NewAuditLog) -> RepoResult<()>;

    /// An explorer's favorites, newest first
    async fn list_for_explorer(&self, explorer_id: i64) -> RepoResult<Vec<Favorite>>;

    /// Current favorite count for a business
    async fn count_for_business(&self, business_id: i64) -> RepoResult<i64>;
}

// ============================================================================
// Visit Repository
// ============================================================================

#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Append one visit event (not audited)
    async fn record(&self, visit: NewVisit) -> RepoResult<Visit>;

    /// All visit timestamps for a business, for histogram bucketing
    async fn timestamps_for_business(&self, business_id: i64) -> RepoResult<Vec<DateTime<Utc>>>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append one immutable audit row and return its id.
    ///
    /// There is no update or delete counterpart; with every audited mutation
    /// committing its own row transactionally, this standalone append covers
    /// mutations that have no dedicated repository operation.
    async fn append(&self, entry: NewAuditLog) -> RepoResult<i64>;

    /// Most recent audit rows, newest first
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<AuditLog>>;

    /// Rows of one entity type whose detail contains `fragment`
    /// (case-insensitive), newest first
    async fn list_by_type_and_detail(
        &self,
        entity_type: &str,
        fragment: &str,
        limit: i64,
    ) -> RepoResult<Vec<AuditLog>>;

    /// Count rows whose action contains `fragment` (case-insensitive)
    async fn count_action_containing(&self, fragment: &str) -> RepoResult<i64>;
}
