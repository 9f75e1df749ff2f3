use super::*;
use crate::testing::{self, DEMO_CLAVE, DEMO_EMAIL, DEMO_TOKEN, FakeBackend, demo_user};
use crate::token_store::MemoryTokenStore;

#[tokio::test]
async fn login_accepts_demo_credentials() {
    let backend = FakeBackend::default();
    let (http, store, _) = testing::client(&backend, MemoryTokenStore::default());

    let outcome = http.auth().login(DEMO_EMAIL, DEMO_CLAVE).await.unwrap();

    assert_eq!(outcome, LoginOutcome::Accepted(LoginResponse { token: DEMO_TOKEN.to_owned(), user: demo_user() }));
    // Persisting is the session's job.
    assert_eq!(store.get(), None);
    let sent = backend.requests();
    assert_eq!(sent[0].body, Some(serde_json::json!({ "email": DEMO_EMAIL, "clave": DEMO_CLAVE })));
}

#[tokio::test]
async fn login_rejection_carries_server_message() {
    let backend = FakeBackend::default();
    let (http, _, _) = testing::client(&backend, MemoryTokenStore::default());

    let outcome = http.auth().login(DEMO_EMAIL, "wrong").await.unwrap();

    assert_eq!(outcome, LoginOutcome::Rejected { message: "Credenciales inválidas".to_owned() });
}

#[tokio::test]
async fn login_transport_failure_is_an_error() {
    let backend = FakeBackend::default();
    backend.set_offline(true);
    let (http, _, _) = testing::client(&backend, MemoryTokenStore::default());

    let err = http.auth().login(DEMO_EMAIL, DEMO_CLAVE).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn me_returns_user_for_live_session() {
    let backend = FakeBackend::default();
    let (http, _, _) = testing::signed_in(&backend);
    assert_eq!(http.auth().me().await.unwrap(), demo_user());
}

#[tokio::test]
async fn logout_swallows_failures() {
    let backend = FakeBackend::default();
    backend.set_offline(true);
    let (http, store, _) = testing::client(&backend, MemoryTokenStore::with_token(DEMO_TOKEN));

    http.auth().logout().await;

    // Remote logout never touches the local slot.
    assert_eq!(store.get().as_deref(), Some(DEMO_TOKEN));
}
