//! The single request/response pipeline every API call goes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request interceptor: attach `Authorization: Bearer <token>` when the token
//! store holds one. Response interceptor: on 401, clear the store and hand
//! control to the [`Navigator`], whatever the endpoint. Other non-2xx statuses
//! are returned to the caller untouched apart from extracting the server's
//! error message. No retries, no timeouts, no cancellation at this layer.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::token_store::TokenStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Navigator, Transport};
use crate::types::{Envelope, ErrorEnvelope};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const UNAUTHORIZED: u16 = 401;

/// Configured HTTP pipeline: base URL, transport, token store and navigator.
pub struct HttpClient<T, S, N> {
    base_url: String,
    transport: T,
    store: S,
    navigator: N,
}

impl<T, S, N> HttpClient<T, S, N>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    pub fn new(config: &ApiConfig, transport: T, store: S, navigator: N) -> Self {
        Self { base_url: config.base_url.clone(), transport, store, navigator }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: &mut HttpRequest) {
        if let Some(token) = self.store.get() {
            request.headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
    }

    fn intercept(&self, request: &HttpRequest, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.status == UNAUTHORIZED {
            tracing::warn!(method = %request.method, url = %request.url, "401 received; clearing session");
            self.store.remove();
            self.navigator.to_login();
            return Err(ApiError::Unauthorized { message: ErrorEnvelope::message_from(&response.body) });
        }
        if !response.is_success() {
            tracing::warn!(method = %request.method, url = %request.url, status = response.status, "request failed");
            return Err(ApiError::Status {
                status: response.status,
                message: ErrorEnvelope::message_from(&response.body),
            });
        }
        Ok(response)
    }

    /// Run one request through both interceptors.
    ///
    /// # Errors
    ///
    /// Transport failures, 401 (after clearing the session) and any other
    /// non-2xx status.
    pub async fn send(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest {
            method,
            url: self.url(path),
            headers: vec![("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned())],
            body,
        };
        self.authorize(&mut request);
        tracing::debug!(%method, url = %request.url, "api request");

        let response = self.transport.send(request.clone()).await?;
        self.intercept(&request, response)
    }

    /// Send and unwrap the `{data}` envelope into `R`.
    ///
    /// # Errors
    ///
    /// Everything [`Self::send`] returns, plus [`ApiError::Decode`] when the
    /// body is not an envelope of `R`.
    pub async fn data<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let response = self.send(method, path, body).await?;
        let envelope: Envelope<R> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Send and discard any 2xx body.
    ///
    /// # Errors
    ///
    /// Everything [`Self::send`] returns.
    pub async fn empty(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        self.send(method, path, body).await.map(|_| ())
    }
}

/// Serialize a request payload.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the payload cannot be represented as JSON.
pub fn json_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
