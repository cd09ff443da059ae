//! reqwest implementation of [`ProductApi`] plus the auth endpoints.

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use stockmgr_core::{Product, ProductId, StatusFilter};

use crate::api::ProductApi;
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Serialize)]
struct ProductCreateRequest<'a> {
    description: &'a str,
    quantity: i64,
}

#[derive(Debug, Serialize)]
struct StockMoveRequest {
    quantity: i64,
}

/// HTTP client for the remote product service.
///
/// A bearer credential from the shared [`Session`] is attached to every
/// call except the two auth endpoints.
pub struct HttpProductApi {
    base_url: String,
    http: reqwest::Client,
    session: Session,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_session(base_url, Session::new())
    }

    pub fn with_session(base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        req.send().await.map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Map a response to `Ok(None)` on 204 / empty / non-JSON bodies, a
    /// parsed value otherwise, and [`ApiError::Api`] on non-success status.
    async fn read_body<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<Option<T>> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let is_json = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !is_json || text.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn read_empty(resp: reqwest::Response) -> ApiResult<()> {
        Self::read_body::<serde_json::Value>(resp).await.map(|_| ())
    }

    /// Register a new user. The server answers with no meaningful body.
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<()> {
        let req = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&CredentialsRequest { username, password });
        let resp = self.send(req).await?;
        Self::read_empty(resp).await
    }

    /// Log in and store the bearer token in the shared session.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<()> {
        let req = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&CredentialsRequest { username, password });
        let resp = self.send(req).await?;

        let body: Option<TokenResponse> = Self::read_body(resp).await?;
        let token = body
            .map(|t| t.token)
            .ok_or_else(|| ApiError::Parse("login response carried no token".to_string()))?;

        self.session.set_token(token);
        Ok(())
    }

    /// Drop the bearer credential.
    pub fn logout(&self) {
        self.session.clear();
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self, query: &str, status: StatusFilter) -> ApiResult<Vec<Product>> {
        let req = self
            .bearer(self.http.get(self.url("/api/products")))
            .query(&[("q", query), ("status", status.as_str())]);
        let resp = self.send(req).await?;

        match Self::read_body::<Vec<Product>>(resp).await {
            Ok(items) => Ok(items.unwrap_or_default()),
            // A malformed list body degrades to "no data" so the view stays
            // usable; mutation failures still surface normally.
            Err(ApiError::Parse(detail)) => {
                tracing::warn!(%detail, "discarding malformed product list body");
                Ok(Vec::new())
            }
            Err(other) => Err(other),
        }
    }

    async fn create(&self, description: &str, quantity: i64) -> ApiResult<Option<Product>> {
        let req = self
            .bearer(self.http.post(self.url("/api/products")))
            .json(&ProductCreateRequest {
                description,
                quantity,
            });
        let resp = self.send(req).await?;
        Self::read_body(resp).await
    }

    async fn soft_delete(&self, id: ProductId) -> ApiResult<()> {
        let req = self.bearer(self.http.delete(self.url(&format!("/api/products/{id}"))));
        let resp = self.send(req).await?;
        Self::read_empty(resp).await
    }

    async fn restore(&self, id: ProductId) -> ApiResult<()> {
        let req = self.bearer(
            self.http
                .post(self.url(&format!("/api/products/{id}/restore"))),
        );
        let resp = self.send(req).await?;
        Self::read_empty(resp).await
    }

    async fn stock_out(&self, id: ProductId, quantity: i64) -> ApiResult<()> {
        let req = self
            .bearer(
                self.http
                    .post(self.url(&format!("/api/products/{id}/stock-out"))),
            )
            .json(&StockMoveRequest { quantity });
        let resp = self.send(req).await?;
        Self::read_empty(resp).await
    }

    async fn stock_in(&self, id: ProductId, quantity: i64) -> ApiResult<()> {
        let req = self
            .bearer(
                self.http
                    .post(self.url(&format!("/api/products/{id}/stock-in"))),
            )
            .json(&StockMoveRequest { quantity });
        let resp = self.send(req).await?;
        Self::read_empty(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpProductApi::new("http://localhost:8080/");
        assert_eq!(api.url("/api/products"), "http://localhost:8080/api/products");
    }
}
