//! Route guard decisions.
//!
//! Token presence alone gates private routes; validity was checked once at
//! startup and a stale token is only discovered by the next 401.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::Session;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Only for visitors without a session (the login screen).
    Public,
    /// Only for visitors with a session.
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving; show a placeholder.
    Loading,
    /// Render the nested route.
    Render,
    Redirect(&'static str),
}

#[must_use]
pub fn evaluate(kind: GuardKind, session: &Session) -> GuardOutcome {
    if session.loading {
        return GuardOutcome::Loading;
    }
    let has_token = session.token.is_some();
    match (kind, has_token) {
        (GuardKind::Public, true) => GuardOutcome::Redirect(HOME_ROUTE),
        (GuardKind::Public, false) | (GuardKind::Private, true) => GuardOutcome::Render,
        (GuardKind::Private, false) => GuardOutcome::Redirect(LOGIN_ROUTE),
    }
}
