//! Database connection management.

use serde::Deserialize;
use sqlx::{Connection, PgConnection};

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Opens a single PostgreSQL connection with the given configuration.
///
/// The directory works over one caller-owned connection; opening it and
/// dropping it are the caller's responsibility, scoped around the session.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, sqlx::Error> {
    PgConnection::connect(&config.url).await
}
