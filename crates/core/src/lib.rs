//! `stockmgr-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types and logic (no IO, no HTTP):
//! the product read model, filter and sort criteria, and the client-side
//! ordering function.

pub mod error;
pub mod filter;
pub mod ordering;
pub mod product;

pub use error::{DomainError, DomainResult};
pub use filter::{FilterCriteria, StatusFilter};
pub use ordering::{SortDirection, SortKey, order};
pub use product::{Product, ProductId};
