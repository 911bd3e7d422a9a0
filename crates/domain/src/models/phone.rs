//! Phone domain model.

use serde::{Deserialize, Serialize};

/// A phone number owned by exactly one client.
///
/// Phone values are unique across the whole directory, regardless of owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub id: i32,
    pub client_id: i32,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_round_trips_through_json() {
        let phone = Phone {
            id: 1,
            client_id: 42,
            phone: "9031843845".to_string(),
        };

        let json = serde_json::to_string(&phone).unwrap();
        let back: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
        assert!(json.contains("clientId"));
    }
}
