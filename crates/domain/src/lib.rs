//! Domain layer for the Client Directory.
//!
//! This crate contains:
//! - Domain models (client records, phones)
//! - Update and search parameter types

pub mod models;
