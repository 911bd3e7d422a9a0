//! Persistence layer for the Client Directory.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - The directory repository

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
