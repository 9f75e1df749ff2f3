//! Native edges of the REST pipeline: `reqwest` transport, a token file and
//! a navigator that can only tell the user to sign in again.

#[cfg(test)]
#[path = "edges_test.rs"]
mod edges_test;

use std::fs;
use std::io;
use std::path::PathBuf;

use api::error::ApiError;
use api::token_store::TokenStore;
use api::transport::{HttpRequest, HttpResponse, Method, Navigator, Transport};
use async_trait::async_trait;

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(method = %request.method, url = %request.url, status, "response");
        Ok(HttpResponse { status, body })
    }
}

/// Token persisted as the sole content of a file. I/O failures are logged;
/// an unreadable file reads as "no token".
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &str) {
        if let Err(e) = self.write(token) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to save token");
        }
    }

    fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_owned())
    }

    fn remove(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "failed to remove token"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn to_login(&self) {
        tracing::warn!("session expired; run `conferencias-cli login` again");
    }
}
