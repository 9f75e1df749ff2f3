//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`Session`] is an explicit value owned by whoever renders or drives the
//! app (a Leptos context signal in the browser, a local in the CLI). It starts
//! in the loading state, resolves once at startup via [`Session::restore`],
//! and is cleared by logout or by any 401.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::http::HttpClient;
use crate::token_store::TokenStore;
use crate::transport::{Navigator, Transport};
use crate::types::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Anonymous,
}

/// Current token, user and loading flag. `Default` is the startup state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { token: None, user: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(token: String, user: User) -> Self {
        Self { token: Some(token), user: Some(user), loading: false }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Loading
        } else if self.token.is_some() && self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    /// Resolve the startup state from the persisted token.
    ///
    /// No token: anonymous without a request. Token present: validated with
    /// `GET /auth/me`; any failure removes it and yields anonymous.
    pub async fn restore<T, S, N>(http: &HttpClient<T, S, N>) -> Self
    where
        T: Transport,
        S: TokenStore,
        N: Navigator,
    {
        let Some(token) = http.store().get() else {
            return Self::anonymous();
        };
        match http.auth().me().await {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "session restored");
                Self::authenticated(token, user)
            }
            Err(err) => {
                tracing::info!(%err, "stored token rejected; starting anonymous");
                http.store().remove();
                Self::anonymous()
            }
        }
    }

    /// Persist and adopt a token/user pair obtained from the login endpoint.
    pub fn login(&mut self, store: &impl TokenStore, token: String, user: User) {
        store.save(&token);
        *self = Self::authenticated(token, user);
    }

    /// Drop the local session. The remote logout call is the caller's concern.
    pub fn logout(&mut self, store: &impl TokenStore) {
        store.remove();
        self.clear();
    }

    /// Forget token and user in memory only, e.g. after the 401 interceptor
    /// already emptied the store.
    pub fn clear(&mut self) {
        *self = Self::anonymous();
    }
}
