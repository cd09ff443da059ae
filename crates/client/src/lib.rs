//! `stockmgr-client` — the API boundary to the remote product service.
//!
//! The `ProductApi` trait is the sole seam the view layer depends on;
//! `HttpProductApi` is the reqwest implementation talking to the REST
//! backend. Auth (register/login) lives on the HTTP client directly, the
//! view never needs it.

pub mod api;
pub mod error;
pub mod http;
pub mod session;

pub use api::ProductApi;
pub use error::{ApiError, ApiResult};
pub use http::HttpProductApi;
pub use session::Session;
