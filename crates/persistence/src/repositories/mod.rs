//! Repository implementations for database operations.

pub mod dashboard;
pub mod intercession;
pub mod prayer;
pub mod qr_group;
pub mod setting;
pub mod unsubscribe;

pub use dashboard::DashboardRepository;
pub use intercession::IntercessionRepository;
pub use prayer::{NewPrayer, PrayerRepository};
pub use qr_group::QrGroupRepository;
pub use setting::SettingRepository;
pub use unsubscribe::UnsubscribeRepository;
