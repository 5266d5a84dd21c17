//! Service layer implementations
//!
//! Services borrow the shared [`ServiceContext`] and carry the business
//! rules: authorization, validation, audit entry construction, and the
//! orchestration of repository calls.

pub mod admin;
pub mod auth;
pub mod business;
pub mod context;
pub mod error;
pub mod favorite;
pub mod profile;
pub mod visit;

pub use admin::AdminService;
pub use auth::AuthService;
pub use business::BusinessService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;
pub use profile::ProfileService;
pub use visit::VisitService;
