//! `ProductApi` — the sole boundary between the view layer and the server.

use async_trait::async_trait;

use stockmgr_core::{Product, ProductId, StatusFilter};

use crate::error::ApiResult;

/// Operations the remote product service exposes.
///
/// The server owns the authoritative data and all quantity business rules;
/// the client only pre-validates as a convenience. Implementations:
/// `HttpProductApi` in production, an in-process fake in view tests.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// List products matching the free-text query and status filter.
    ///
    /// An absent or malformed body yields the empty vector, never an error:
    /// list shape failures must not take the view down.
    async fn list(&self, query: &str, status: StatusFilter) -> ApiResult<Vec<Product>>;

    /// Create a product with an initial quantity. The server may answer
    /// with the created product or an empty body.
    async fn create(&self, description: &str, quantity: i64) -> ApiResult<Option<Product>>;

    /// Mark a product deleted without removing its record.
    async fn soft_delete(&self, id: ProductId) -> ApiResult<()>;

    /// Undo a soft delete.
    async fn restore(&self, id: ProductId) -> ApiResult<()>;

    /// Reduce stock on an active product.
    async fn stock_out(&self, id: ProductId, quantity: i64) -> ApiResult<()>;

    /// Increase stock on an active product.
    async fn stock_in(&self, id: ProductId, quantity: i64) -> ApiResult<()>;
}
