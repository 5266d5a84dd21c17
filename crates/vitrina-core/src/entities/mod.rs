//! Domain entities

pub mod audit_log;
pub mod business;
pub mod favorite;
pub mod profile;
pub mod user;
pub mod visit;

pub use audit_log::{AuditLog, NewAuditLog};
pub use business::Business;
pub use favorite::{Favorite, ToggleOutcome};
pub use profile::{ExplorerProfile, OwnerProfile, UserProfile};
pub use user::{Role, User};
pub use visit::Visit;
