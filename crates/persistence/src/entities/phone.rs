//! Phone entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the phones table.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneEntity {
    pub id: i32,
    pub client_id: i32,
    pub phone: String,
}

impl From<PhoneEntity> for domain::models::Phone {
    fn from(entity: PhoneEntity) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            phone: entity.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_converts_to_domain_phone() {
        let entity = PhoneEntity {
            id: 11,
            client_id: 2,
            phone: "9547366632".to_string(),
        };

        let phone: domain::models::Phone = entity.into();
        assert_eq!(phone.id, 11);
        assert_eq!(phone.client_id, 2);
        assert_eq!(phone.phone, "9547366632");
    }
}
