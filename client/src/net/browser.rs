//! Browser edges of the REST pipeline.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`, token in `localStorage`,
//! full-page navigation on session expiry.
//! Server-side (SSR): the transport fails fast and storage reads as empty,
//! since these calls are only meaningful in the browser.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use api::HttpClient;
use api::config::ApiConfig;
use api::error::ApiError;
use api::guard::LOGIN_ROUTE;
use api::token_store::TokenStore;
use api::transport::{HttpRequest, HttpResponse, Navigator, Transport};
use async_trait::async_trait;

#[cfg(feature = "hydrate")]
use api::config::TOKEN_STORAGE_KEY;

pub type BrowserClient = HttpClient<GlooTransport, LocalStorageTokenStore, BrowserNavigator>;

/// Endpoint config baked in at build time from `API_URL`.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_value(option_env!("API_URL"))
}

/// Pipeline wired to the browser. Cheap; build one per operation.
pub fn client() -> BrowserClient {
    HttpClient::new(&api_config(), GlooTransport, LocalStorageTokenStore, BrowserNavigator)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use api::transport::Method;
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;
            let resp = outgoing.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport(format!("{} {} is not available on the server", request.method, request.url)))
        }
    }
}

/// Token slot backed by `localStorage["token"]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for LocalStorageTokenStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// Full-page navigation to the login route.
///
/// The reload resets every in-memory signal, so no page keeps showing data
/// from the expired session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

/// Whether a session-expiry redirect should leave `current_path`.
///
/// Staying put on the login screen keeps its error message visible after a
/// rejected sign-in.
pub fn needs_login_redirect(current_path: &str) -> bool {
    current_path.trim_end_matches('/') != LOGIN_ROUTE
}

impl Navigator for BrowserNavigator {
    fn to_login(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            let path = location.pathname().unwrap_or_default();
            if needs_login_redirect(&path) {
                log::info!("session expired; leaving {path}");
                let _ = location.set_href(LOGIN_ROUTE);
            }
        }
    }
}
