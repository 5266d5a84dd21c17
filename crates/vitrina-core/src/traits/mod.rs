//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AuditLogRepository, BusinessRepository, FavoriteRepository, NewBusiness,
    NewExplorerProfile, NewOwnerProfile, NewProfile, NewUser, NewVisit, ProfileRepository,
    RepoResult, UserRepository, VisitRepository,
};
