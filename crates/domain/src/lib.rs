//! Domain layer for the Prayer Board backend.
//!
//! This crate contains:
//! - Domain models and request/response types
//! - Pure notification rendering (email template fill)

pub mod models;
pub mod services;
