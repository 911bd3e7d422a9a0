//! Repository implementations for database operations.

pub mod client;

pub use client::{ClientRepository, DirectoryTable};
