//! Model to entity mappers
//!
//! Conversions from database rows to domain objects. The user conversion is
//! fallible because the stored role string must parse back into [`vitrina_core::Role`].

mod audit_log;
mod business;
mod favorite;
mod profile;
mod user;
mod visit;
