//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! vitrina-core. Each repository handles database operations for a specific
//! domain entity. Audited mutations open a transaction, apply the change,
//! append the audit row, and commit together.

mod audit_log;
mod business;
mod error;
mod favorite;
mod profile;
mod user;
mod visit;

pub use audit_log::PgAuditLogRepository;
pub use business::PgBusinessRepository;
pub use favorite::PgFavoriteRepository;
pub use profile::PgProfileRepository;
pub use user::PgUserRepository;
pub use visit::PgVisitRepository;
