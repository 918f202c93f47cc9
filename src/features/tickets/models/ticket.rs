use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A ticket record.
///
/// The collection is flat: tickets hold no references to each other.
/// `created_at` is a calendar day (serialized `YYYY-MM-DD`), matching the
/// wire format callers already depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub status: String,
    pub environment: String,
    pub created_at: NaiveDate,
}

impl Ticket {
    /// Build a seed ticket from fixed literal data.
    pub(crate) fn seed(
        id: u64,
        title: &str,
        status: &str,
        environment: &str,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            status: status.to_string(),
            environment: environment.to_string(),
            created_at,
        }
    }

    /// Shallow-merge `patch` over this ticket.
    ///
    /// Every key present in the patch replaces the corresponding field,
    /// `id`, `environment` and `created_at` included; keys the model does
    /// not know are dropped. Fails when a patched value cannot be read
    /// back into the typed model (e.g. a string where `id` belongs).
    pub fn merged(&self, patch: &Map<String, Value>) -> serde_json::Result<Ticket> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut value {
            for (key, patched) in patch {
                fields.insert(key.clone(), patched.clone());
            }
        }
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Ticket {
        Ticket::seed(
            1,
            "Fix Login Issue",
            "open",
            "dev",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_serializes_created_at_as_plain_date() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["created_at"], json!("2024-01-15"));
    }

    #[test]
    fn test_merged_replaces_only_patched_fields() {
        let mut patch = Map::new();
        patch.insert("status".to_string(), json!("closed"));

        let merged = sample().merged(&patch).unwrap();
        assert_eq!(merged.status, "closed");
        assert_eq!(merged.title, "Fix Login Issue");
        assert_eq!(merged.id, 1);
        assert_eq!(merged.environment, "dev");
    }

    #[test]
    fn test_merged_overwrites_unprotected_fields() {
        let mut patch = Map::new();
        patch.insert("id".to_string(), json!(42));
        patch.insert("environment".to_string(), json!("prod"));
        patch.insert("created_at".to_string(), json!("2025-06-01"));

        let merged = sample().merged(&patch).unwrap();
        assert_eq!(merged.id, 42);
        assert_eq!(merged.environment, "prod");
        assert_eq!(
            merged.created_at,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_merged_rejects_type_mismatch() {
        let mut patch = Map::new();
        patch.insert("id".to_string(), json!("not-a-number"));

        assert!(sample().merged(&patch).is_err());
    }

    #[test]
    fn test_merged_ignores_unknown_keys() {
        let mut patch = Map::new();
        patch.insert("assignee".to_string(), json!("nobody"));

        let merged = sample().merged(&patch).unwrap();
        assert_eq!(merged, sample());
    }
}
