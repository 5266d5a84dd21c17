//! # vitrina-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AdminService, AuthService, BusinessService, FavoriteService, ProfileService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, VisitService,
};
