//! # vitrina-core
//!
//! Domain layer containing entities, repository traits, the audit diff engine,
//! and the visit statistics math. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod audit;
pub mod entities;
pub mod error;
pub mod stats;
pub mod traits;

// Re-export commonly used types at crate root
pub use audit::{compute_diff, snapshot, Snapshot, NO_CHANGES};
pub use entities::{
    AuditLog, Business, ExplorerProfile, Favorite, NewAuditLog, OwnerProfile, Role,
    ToggleOutcome, User, UserProfile, Visit,
};
pub use error::DomainError;
pub use stats::Histogram;
pub use traits::{
    AuditLogRepository, BusinessRepository, FavoriteRepository, NewBusiness,
    NewExplorerProfile, NewOwnerProfile, NewProfile, NewUser, NewVisit, ProfileRepository,
    RepoResult, UserRepository, VisitRepository,
};
