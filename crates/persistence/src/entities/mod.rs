//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod client;
pub mod phone;

pub use client::ClientWithPhonesEntity;
pub use phone::PhoneEntity;
