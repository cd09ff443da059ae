//! Filter criteria for list requests.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Soft-delete status filter sent with every list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    Active,
    Deleted,
    All,
}

impl StatusFilter {
    /// Wire value used in the `status` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Active => "ACTIVE",
            StatusFilter::Deleted => "DELETED",
            StatusFilter::All => "ALL",
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::Active
    }
}

impl core::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(StatusFilter::Active),
            "DELETED" => Ok(StatusFilter::Deleted),
            "ALL" => Ok(StatusFilter::All),
            other => Err(DomainError::validation(format!(
                "status must be ACTIVE, DELETED or ALL (got {other:?})"
            ))),
        }
    }
}

/// Free-text query plus status filter.
///
/// `status` changes trigger an automatic reload in the view; `query` edits
/// only take effect on an explicit reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub status: StatusFilter,
}
