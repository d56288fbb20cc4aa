//! Domain models for the Prayer Board.

pub mod intercession;
pub mod prayer;
pub mod qr_group;
pub mod settings;
pub mod stats;
pub mod unsubscribe;

pub use intercession::IntercessionPost;
pub use prayer::Prayer;
pub use qr_group::QrCodeGroup;
