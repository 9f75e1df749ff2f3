//! Authentication endpoints.
//!
//! DESIGN
//! ======
//! Login failure is decided here, at the HTTP boundary: any server answer is
//! folded into a [`LoginOutcome`] carrying either the credentials pair or the
//! message to show. Only failures with no server answer stay as `Err`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::http::{HttpClient, json_body};
use crate::token_store::TokenStore;
use crate::transport::{Method, Navigator, Transport};
use crate::types::{LoginRequest, LoginResponse, MeResponse, User};

pub const DEFAULT_LOGIN_ERROR: &str = "Usuario o contraseña incorrectos.";

/// Result of exchanging credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted(LoginResponse),
    Rejected { message: String },
}

pub struct AuthApi<'a, T, S, N> {
    http: &'a HttpClient<T, S, N>,
}

impl<T, S, N> HttpClient<T, S, N>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    pub fn auth(&self) -> AuthApi<'_, T, S, N> {
        AuthApi { http: self }
    }
}

impl<T, S, N> AuthApi<'_, T, S, N>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    /// `POST /auth/login`.
    ///
    /// Does not touch the session; the caller stores the accepted pair via
    /// [`crate::session::Session::login`].
    ///
    /// # Errors
    ///
    /// Only when no usable answer came back (transport or decode failure).
    pub async fn login(&self, email: &str, clave: &str) -> Result<LoginOutcome, ApiError> {
        let body = json_body(&LoginRequest { email, clave })?;
        match self.http.data::<LoginResponse>(Method::Post, "/auth/login", Some(body)).await {
            Ok(response) => {
                tracing::info!(user_id = response.user.id, "login accepted");
                Ok(LoginOutcome::Accepted(response))
            }
            Err(err @ (ApiError::Unauthorized { .. } | ApiError::Status { .. })) => {
                let message = err.server_message().unwrap_or(DEFAULT_LOGIN_ERROR).to_owned();
                tracing::info!(%err, "login rejected");
                Ok(LoginOutcome::Rejected { message })
            }
            Err(err) => Err(err),
        }
    }

    /// `POST /auth/logout`. Best-effort: failures are logged, never returned.
    pub async fn logout(&self) {
        if let Err(err) = self.http.empty(Method::Post, "/auth/logout", None).await {
            tracing::warn!(%err, "remote logout failed");
        }
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Any pipeline error; a 401 has already cleared the stored token.
    pub async fn me(&self) -> Result<User, ApiError> {
        let me: MeResponse = self.http.data(Method::Get, "/auth/me", None).await?;
        Ok(me.user)
    }
}
