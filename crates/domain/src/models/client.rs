//! Client domain model.

use serde::{Deserialize, Serialize};

/// A client as returned by directory searches, with the aggregated list of
/// owned phone numbers.
///
/// The phone list mirrors the database aggregate: a client without any
/// phones carries a single `None` entry rather than an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phones: Vec<Option<String>>,
}

/// Partial update for a client.
///
/// `None` fields are left untouched. `phones: Some(list)` replaces the
/// client's whole phone set with `list`, even when the list is empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Option<Vec<String>>,
}

/// Search filters for clients.
///
/// Every filter is optional; supplied filters are combined with AND and
/// matched as case-insensitive substrings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSearch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientUpdate {
    /// True when the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phones.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_record_serializes_phone_placeholder() {
        let record = ClientRecord {
            id: 7,
            first_name: "Sergey".to_string(),
            last_name: "Smith".to_string(),
            email: "s@x".to_string(),
            phones: vec![None],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["phones"], serde_json::json!([null]));
        assert_eq!(json["firstName"], "Sergey");
    }

    #[test]
    fn test_client_update_default_is_empty() {
        let update = ClientUpdate::default();
        assert!(update.is_empty());
    }

    #[test]
    fn test_client_update_with_empty_phone_list_is_not_empty() {
        let update = ClientUpdate {
            phones: Some(vec![]),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_client_search_deserializes_partial_filters() {
        let search: ClientSearch =
            serde_json::from_str(r#"{"email": "x@example.com"}"#).unwrap();
        assert_eq!(search.email.as_deref(), Some("x@example.com"));
        assert!(search.first_name.is_none());
        assert!(search.last_name.is_none());
        assert!(search.phone.is_none());
    }
}
