//! HTTP route handlers.

pub mod admin_groups;
pub mod admin_intercessions;
pub mod admin_prayers;
pub mod health;
pub mod intercessions;
pub mod prayers;
pub mod stats;
pub mod unsubscribe;
pub mod verse;
