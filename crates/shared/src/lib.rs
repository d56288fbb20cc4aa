//! Shared utilities and common types for the Prayer Board backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Cryptographic utilities (unsubscribe tokens, token hashing)
//! - Slug generation for QR code groups
//! - Common validation logic

pub mod crypto;
pub mod slug;
pub mod validation;
