//! # vitrina-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `vitrina-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Every audited mutation commits its entity change and its audit row in one
//! transaction.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitrina_common::AppConfig;
//! use vitrina_db::{create_pool, PgUserRepository};
//! use vitrina_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::{
    PgAuditLogRepository, PgBusinessRepository, PgFavoriteRepository, PgProfileRepository,
    PgUserRepository, PgVisitRepository,
};
