//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod email_unsubscribe;
pub mod intercession_post;
pub mod prayer;
pub mod qr_code_group;
pub mod site_setting;

pub use email_unsubscribe::EmailUnsubscribeEntity;
pub use intercession_post::IntercessionPostEntity;
pub use prayer::{PrayerEntity, PrayerWithGroupEntity};
pub use qr_code_group::{QrCodeGroupEntity, QrCodeGroupWithCountEntity};
pub use site_setting::SiteSettingEntity;
