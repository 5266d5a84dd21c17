//! Database models - SQLx-compatible structs for PostgreSQL tables

mod audit_log;
mod business;
mod count;
mod favorite;
mod profile;
mod user;
mod visit;

pub use audit_log::AuditLogModel;
pub use business::BusinessModel;
pub use count::LabelCountModel;
pub use favorite::FavoriteModel;
pub use profile::{ExplorerProfileModel, OwnerProfileModel};
pub use user::UserModel;
pub use visit::VisitModel;
