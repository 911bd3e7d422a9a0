//! Client entity (database row mapping).

use sqlx::FromRow;

/// Row mapping for a client search result with aggregated phone numbers.
///
/// The `phones` column is an `ARRAY_AGG` over a left join, so a client with
/// no phones decodes as `vec![None]` rather than an empty vector.
#[derive(Debug, Clone, FromRow)]
pub struct ClientWithPhonesEntity {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phones: Vec<Option<String>>,
}

impl From<ClientWithPhonesEntity> for domain::models::ClientRecord {
    fn from(entity: ClientWithPhonesEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phones: entity.phones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_converts_to_domain_record() {
        let entity = ClientWithPhonesEntity {
            id: 3,
            first_name: "Alexey".to_string(),
            last_name: "Subbotin".to_string(),
            email: "subbotin@example.com".to_string(),
            phones: vec![Some("9031843845".to_string())],
        };

        let record: domain::models::ClientRecord = entity.into();
        assert_eq!(record.id, 3);
        assert_eq!(record.email, "subbotin@example.com");
        assert_eq!(record.phones, vec![Some("9031843845".to_string())]);
    }
}
