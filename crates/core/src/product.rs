//! Product read model mirrored from the server.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Product identifier (numeric, assigned by the server).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(id))
    }
}

/// A product as reported by the server's list/create responses.
///
/// This is a **read model**: the server owns the authoritative record, the
/// client never mutates it in place. Timestamps are server-assigned and
/// carried for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub description: String,
    pub quantity: i64,
    pub deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether the product currently accepts stock movements.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_parses_from_trimmed_text() {
        let id: ProductId = " 42 ".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
    }

    #[test]
    fn product_id_rejects_garbage() {
        let err = "banana".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn product_deserializes_from_server_shape() {
        let json = r#"{
            "id": 7,
            "description": "banana nanica",
            "quantity": 12,
            "deleted": false,
            "deletedAt": null,
            "createdAt": "2026-01-05T12:00:00Z",
            "updatedAt": "2026-01-06T08:30:00Z"
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new(7));
        assert_eq!(p.description, "banana nanica");
        assert_eq!(p.quantity, 12);
        assert!(p.is_active());
        assert!(p.deleted_at.is_none());
        assert!(p.created_at.is_some());
    }

    #[test]
    fn product_tolerates_missing_timestamps() {
        let json = r#"{"id": 1, "description": "x", "quantity": 0, "deleted": true}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(!p.is_active());
        assert!(p.created_at.is_none());
    }
}
