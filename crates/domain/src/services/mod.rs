//! Domain services.

pub mod notification;
