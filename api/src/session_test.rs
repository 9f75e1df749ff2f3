use super::*;
use crate::testing::{self, DEMO_CLAVE, DEMO_EMAIL, DEMO_TOKEN, FakeBackend, demo_user};
use crate::auth::LoginOutcome;
use crate::token_store::MemoryTokenStore;
use crate::types::Conferencista;

// =============================================================
// Defaults and status
// =============================================================

#[test]
fn default_is_loading_without_credentials() {
    let session = Session::default();
    assert!(session.loading);
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert_eq!(session.status(), SessionStatus::Loading);
}

#[test]
fn status_requires_both_token_and_user() {
    let mut session = Session::anonymous();
    assert_eq!(session.status(), SessionStatus::Anonymous);
    session.token = Some("t".to_owned());
    assert_eq!(session.status(), SessionStatus::Anonymous);
    session.user = Some(demo_user());
    assert_eq!(session.status(), SessionStatus::Authenticated);
}

// =============================================================
// Startup restore
// =============================================================

#[tokio::test]
async fn restore_without_token_skips_network() {
    let backend = FakeBackend::default();
    let (http, _, _) = testing::client(&backend, MemoryTokenStore::default());

    let session = Session::restore(&http).await;

    assert_eq!(session, Session::anonymous());
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn restore_with_valid_token_authenticates() {
    let backend = FakeBackend::default();
    let (http, store, _) = testing::signed_in(&backend);

    let session = Session::restore(&http).await;

    assert!(!session.loading);
    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(session.token.as_deref(), Some(DEMO_TOKEN));
    assert_eq!(session.user, Some(demo_user()));
    assert_eq!(store.get().as_deref(), Some(DEMO_TOKEN));
}

#[tokio::test]
async fn restore_with_rejected_token_goes_anonymous_and_clears_store() {
    let backend = FakeBackend::default();
    let (http, store, _) = testing::client(&backend, MemoryTokenStore::with_token("expired"));

    let session = Session::restore(&http).await;

    assert!(!session.loading);
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn restore_on_transport_failure_goes_anonymous() {
    let backend = FakeBackend::with_session(DEMO_TOKEN);
    backend.set_offline(true);
    let (http, store, _) = testing::client(&backend, MemoryTokenStore::with_token(DEMO_TOKEN));

    let session = Session::restore(&http).await;

    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert_eq!(store.get(), None);
}

// =============================================================
// Login / logout
// =============================================================

#[tokio::test]
async fn login_makes_later_calls_carry_the_new_token() {
    let backend = FakeBackend::default();
    let (http, store, _) = testing::client(&backend, MemoryTokenStore::default());
    let mut session = Session::anonymous();

    let LoginOutcome::Accepted(pair) = http.auth().login(DEMO_EMAIL, DEMO_CLAVE).await.unwrap() else {
        panic!("demo credentials must be accepted");
    };
    session.login(&store, pair.token, pair.user);
    let _: Vec<Conferencista> = http.resource::<Conferencista>().list().await.unwrap();

    assert_eq!(session.status(), SessionStatus::Authenticated);
    let last = backend.requests().pop().unwrap();
    assert_eq!(last.header("Authorization"), Some("Bearer t1"));
}

#[test]
fn logout_clears_store_and_memory() {
    let store = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    session.login(&store, "t1".to_owned(), demo_user());

    session.logout(&store);

    assert_eq!(session, Session::anonymous());
    assert_eq!(store.get(), None);
}

#[test]
fn clear_leaves_store_untouched() {
    let store = MemoryTokenStore::with_token("t1");
    let mut session = Session::authenticated("t1".to_owned(), demo_user());
    session.clear();
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert_eq!(store.get().as_deref(), Some("t1"));
}
