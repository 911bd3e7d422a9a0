//! Client repository for database operations.

use sqlx::{Connection, PgConnection};

use domain::models::{ClientRecord, ClientSearch, ClientUpdate, Phone};

use crate::entities::{ClientWithPhonesEntity, PhoneEntity};
use crate::metrics::QueryTimer;

/// Tables owned by the directory schema.
///
/// A table identifier cannot be bound as a query parameter, so the
/// destructive [`ClientRepository::drop_table`] operation only accepts
/// identifiers from this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryTable {
    Clients,
    Phones,
}

impl DirectoryTable {
    /// The SQL identifier of the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryTable::Clients => "clients",
            DirectoryTable::Phones => "phones",
        }
    }
}

/// Helper for building the dynamic WHERE clause of a client search.
/// Tracks predicate strings and their bound patterns so parameter positions
/// stay in sync.
struct ClientSearchBuilder {
    conditions: Vec<String>,
    patterns: Vec<String>,
}

impl ClientSearchBuilder {
    /// Fold the supplied filters into predicates with positional parameters.
    /// Each filter becomes a case-insensitive substring match.
    fn build(search: &ClientSearch) -> Self {
        let mut conditions = Vec::new();
        let mut patterns = Vec::new();

        if let Some(first_name) = &search.first_name {
            patterns.push(format!("%{}%", first_name));
            conditions.push(format!("clients.first_name ILIKE ${}", patterns.len()));
        }

        if let Some(last_name) = &search.last_name {
            patterns.push(format!("%{}%", last_name));
            conditions.push(format!("clients.last_name ILIKE ${}", patterns.len()));
        }

        if let Some(email) = &search.email {
            patterns.push(format!("%{}%", email));
            conditions.push(format!("clients.email ILIKE ${}", patterns.len()));
        }

        // The phone filter must not constrain the left join used for
        // aggregation, or matching rows would lose their other numbers.
        if let Some(phone) = &search.phone {
            patterns.push(format!("%{}%", phone));
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM phones p WHERE p.client_id = clients.id AND p.phone ILIKE ${})",
                patterns.len()
            ));
        }

        Self {
            conditions,
            patterns,
        }
    }

    /// Get the WHERE clause as a string.
    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            "TRUE".to_string()
        } else {
            self.conditions.join(" AND ")
        }
    }
}

/// Repository for client and phone directory operations.
///
/// Owns a single live connection; methods take `&mut self`, so a repository
/// can only run one operation at a time.
pub struct ClientRepository {
    conn: PgConnection,
}

impl ClientRepository {
    /// Creates a new ClientRepository over the given connection.
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Create the clients and phones tables if they do not exist yet.
    ///
    /// Safe to call on an already-initialized database.
    pub async fn init_schema(&mut self) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("init_schema");
        tracing::debug!("initializing directory schema");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clients(
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(50),
                last_name VARCHAR(50),
                email VARCHAR(100) UNIQUE
            )
            "#,
        )
        .execute(&mut self.conn)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS phones(
                id SERIAL PRIMARY KEY,
                client_id INTEGER REFERENCES clients(id) ON DELETE CASCADE,
                phone VARCHAR(15) UNIQUE
            )
            "#,
        )
        .execute(&mut self.conn)
        .await?;

        timer.record();
        Ok(())
    }

    /// Insert a client together with its initial phone numbers.
    ///
    /// The client row and all phone rows are committed as one transaction;
    /// if any phone collides with an existing number, nothing is persisted.
    /// Returns the id of the new client.
    pub async fn add_client(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phones: &[&str],
    ) -> Result<i32, sqlx::Error> {
        let timer = QueryTimer::new("add_client");

        let mut tx = self.conn.begin().await?;

        let client_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO clients(first_name, last_name, email)
            VALUES($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        for phone in phones {
            sqlx::query(
                r#"
                INSERT INTO phones(client_id, phone)
                VALUES($1, $2)
                "#,
            )
            .bind(client_id)
            .bind(phone)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(client_id)
    }

    /// Insert a phone number owned by an existing client.
    ///
    /// Fails if the client does not exist or the number is already taken,
    /// by any client.
    pub async fn add_phone(&mut self, client_id: i32, phone: &str) -> Result<Phone, sqlx::Error> {
        let timer = QueryTimer::new("add_phone");
        let entity = sqlx::query_as::<_, PhoneEntity>(
            r#"
            INSERT INTO phones(client_id, phone)
            VALUES($1, $2)
            RETURNING id, client_id, phone
            "#,
        )
        .bind(client_id)
        .bind(phone)
        .fetch_one(&mut self.conn)
        .await?;
        timer.record();
        Ok(entity.into())
    }

    /// Delete the phone row matching both the owner and the exact number.
    ///
    /// Returns whether a row was removed; no error when nothing matches.
    pub async fn delete_phone(&mut self, client_id: i32, phone: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_phone");
        let result = sqlx::query(
            r#"
            DELETE FROM phones
            WHERE client_id = $1 AND phone = $2
            "#,
        )
        .bind(client_id)
        .bind(phone)
        .execute(&mut self.conn)
        .await?;
        timer.record();
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update to a client.
    ///
    /// Only fields present in the update are touched. A supplied phone list
    /// replaces the client's whole phone set, in the order given; the delete
    /// and the inserts run in the same transaction as the field updates.
    /// Updating an unknown client id is a no-op.
    pub async fn change_client(
        &mut self,
        client_id: i32,
        update: &ClientUpdate,
    ) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("change_client");
        if update.is_empty() {
            timer.record();
            return Ok(());
        }

        let mut tx = self.conn.begin().await?;

        if let Some(first_name) = &update.first_name {
            sqlx::query("UPDATE clients SET first_name = $1 WHERE id = $2")
                .bind(first_name)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(last_name) = &update.last_name {
            sqlx::query("UPDATE clients SET last_name = $1 WHERE id = $2")
                .bind(last_name)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(email) = &update.email {
            sqlx::query("UPDATE clients SET email = $1 WHERE id = $2")
                .bind(email)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(phones) = &update.phones {
            sqlx::query("DELETE FROM phones WHERE client_id = $1")
                .bind(client_id)
                .execute(&mut *tx)
                .await?;

            for phone in phones {
                sqlx::query(
                    r#"
                    INSERT INTO phones(client_id, phone)
                    VALUES($1, $2)
                    "#,
                )
                .bind(client_id)
                .bind(phone)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// Find all clients matching the supplied filters.
    ///
    /// Filters are ANDed together and matched as case-insensitive
    /// substrings; an empty search returns every client. Each result row
    /// carries the aggregated list of all the client's phone numbers; a
    /// client without phones yields a single `None` entry.
    pub async fn find_client(
        &mut self,
        search: &ClientSearch,
    ) -> Result<Vec<ClientRecord>, sqlx::Error> {
        let timer = QueryTimer::new("find_client");

        let filter = ClientSearchBuilder::build(search);
        let query = format!(
            r#"
            SELECT clients.id, clients.first_name, clients.last_name, clients.email,
                   ARRAY_AGG(phones.phone) AS phones
            FROM clients
            LEFT JOIN phones ON phones.client_id = clients.id
            WHERE {}
            GROUP BY clients.id
            ORDER BY clients.id
            "#,
            filter.where_clause()
        );

        let mut builder = sqlx::query_as::<_, ClientWithPhonesEntity>(&query);
        for pattern in &filter.patterns {
            builder = builder.bind(pattern.as_str());
        }
        let entities = builder.fetch_all(&mut self.conn).await?;

        timer.record();
        Ok(entities.into_iter().map(ClientRecord::from).collect())
    }

    /// Delete a client; the database cascades to its phones.
    ///
    /// Returns whether a row was removed; no error for an unknown id.
    pub async fn delete_client(&mut self, client_id: i32) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_client");
        let result = sqlx::query(
            r#"
            DELETE FROM clients
            WHERE id = $1
            "#,
        )
        .bind(client_id)
        .execute(&mut self.conn)
        .await?;
        timer.record();
        Ok(result.rows_affected() > 0)
    }

    /// Drop one of the directory tables if it exists.
    ///
    /// Destructive; intended for test and reset use only. `phones` must be
    /// dropped before `clients`, since it references the clients table.
    pub async fn drop_table(&mut self, table: DirectoryTable) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("drop_table");
        tracing::debug!(table = table.as_str(), "dropping directory table");

        let statement = format!("DROP TABLE IF EXISTS {}", table.as_str());
        sqlx::query(&statement).execute(&mut self.conn).await?;

        timer.record();
        Ok(())
    }
}
