//! HTTP request handlers organized by domain

pub mod admin;
pub mod auth;
pub mod businesses;
pub mod favorites;
pub mod health;
pub mod profiles;
pub mod stats;
pub mod users;
