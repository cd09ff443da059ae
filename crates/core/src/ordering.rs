//! Client-side ordering of the loaded working set.
//!
//! Ordering is purely local: it never touches the server and never mutates
//! the input snapshot. The comparator always yields a total order — every
//! tie falls through to the numeric id, and `Desc` reverses the *combined*
//! comparator (tie-breaks included) rather than re-running comparisons.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::product::Product;

/// Column the working set is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    Id,
    Description,
    Quantity,
    Status,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Id
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ID" => Ok(SortKey::Id),
            "DESCRIPTION" => Ok(SortKey::Description),
            "QUANTITY" => Ok(SortKey::Quantity),
            "STATUS" => Ok(SortKey::Status),
            other => Err(DomainError::validation(format!(
                "sort key must be ID, DESCRIPTION, QUANTITY or STATUS (got {other:?})"
            ))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

/// Case-insensitive description comparison (Unicode lowercase).
fn cmp_description(a: &Product, b: &Product) -> Ordering {
    a.description.to_lowercase().cmp(&b.description.to_lowercase())
}

/// Active products rank before deleted ones in ascending order.
fn status_rank(p: &Product) -> u8 {
    if p.deleted { 1 } else { 0 }
}

/// Return a new, display-ordered copy of `items`.
pub fn order(items: &[Product], sort_by: SortKey, direction: SortDirection) -> Vec<Product> {
    let mut ordered = items.to_vec();

    ordered.sort_by(|a, b| {
        let primary = match sort_by {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::Description => cmp_description(a, b),
            SortKey::Status => status_rank(a)
                .cmp(&status_rank(b))
                .then_with(|| cmp_description(a, b)),
        };

        // Every comparator bottoms out on the numeric id, keeping the order
        // total and deterministic before direction is applied.
        let combined = primary.then_with(|| a.id.cmp(&b.id));

        match direction {
            SortDirection::Asc => combined,
            SortDirection::Desc => combined.reverse(),
        }
    });

    ordered
}
