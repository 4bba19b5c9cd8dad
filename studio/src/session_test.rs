use super::*;
use crate::credential::MemoryCredentials;
use crate::scripted::{ScriptedBackend, TOKEN};

fn token(raw: &str) -> Credential {
    Credential::parse(raw).unwrap()
}

// =============================================================
// restore
// =============================================================

#[tokio::test]
async fn restore_without_stored_credential_makes_no_call() {
    let backend = ScriptedBackend::new();
    let store = MemoryCredentials::default();

    let session = restore(&backend, &store).await;

    assert_eq!(session, Session::Anonymous);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn restore_with_valid_credential_resolves_identity() {
    let backend = ScriptedBackend::new();
    let store = MemoryCredentials::with(token(TOKEN));

    let session = restore(&backend, &store).await;

    assert_eq!(session.identity().map(|i| i.name.as_str()), Some("Ada"));
    assert_eq!(session.context().authorization().as_deref(), Some("Bearer T"));
    assert_eq!(store.load(), Some(token(TOKEN)));
}

#[tokio::test]
async fn restore_with_expired_credential_clears_storage() {
    let backend = ScriptedBackend::new();
    backend.expire_tokens();
    let store = MemoryCredentials::with(token(TOKEN));

    let session = restore(&backend, &store).await;

    assert_eq!(session, Session::Anonymous);
    assert!(store.load().is_none());
    assert_eq!(backend.calls(), vec!["current_identity"]);
}

#[tokio::test]
async fn restore_with_unreachable_backend_clears_storage_without_retry() {
    let backend = ScriptedBackend::new();
    backend.offline.set(true);
    let store = MemoryCredentials::with(token(TOKEN));

    let session = restore(&backend, &store).await;

    assert_eq!(session, Session::Anonymous);
    assert!(store.load().is_none());
    assert_eq!(backend.call_count(), 1);
}

// =============================================================
// login / register
// =============================================================

#[tokio::test]
async fn login_stores_token_and_sets_identity() {
    let backend = ScriptedBackend::new();
    let store = MemoryCredentials::default();

    let session = login(&backend, &store, "a@b.com", "x").await.unwrap();

    assert_eq!(
        session.identity(),
        Some(&Identity { id: 1, email: "a@b.com".to_owned(), name: String::new() })
    );
    assert_eq!(session.context().credential(), Some(&token("T")));
    assert_eq!(store.load(), Some(token("T")));
}

#[tokio::test]
async fn login_rejection_surfaces_backend_detail_and_stores_nothing() {
    let backend = ScriptedBackend::new();
    backend.grant.borrow_mut().take();
    let store = MemoryCredentials::default();

    let err = login(&backend, &store, "a@b.com", "wrong").await.unwrap_err();

    assert!(!err.is_unauthorized());
    assert_eq!(err.notice(crate::Operation::Login, "http://localhost:8000"), "Incorrect email or password");
    assert!(store.load().is_none());
}

#[tokio::test]
async fn login_with_blank_fields_makes_no_call() {
    let backend = ScriptedBackend::new();
    let store = MemoryCredentials::default();

    let err = login(&backend, &store, "   ", "x").await.unwrap_err();
    assert_eq!(err, ClientError::Validation(ValidationError::MissingCredentials));
    let err = login(&backend, &store, "a@b.com", "").await.unwrap_err();
    assert_eq!(err, ClientError::Validation(ValidationError::MissingCredentials));

    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn login_with_empty_access_token_is_a_decode_error() {
    let backend = ScriptedBackend::new();
    if let Some(grant) = backend.grant.borrow_mut().as_mut() {
        grant.access_token = String::new();
    }
    let store = MemoryCredentials::default();

    let err = login(&backend, &store, "a@b.com", "x").await.unwrap_err();

    assert!(matches!(err, ClientError::Api(ApiError::Decode(_))));
    assert!(store.load().is_none());
}

#[tokio::test]
async fn register_without_any_name_uses_email_local_part() {
    let backend = ScriptedBackend::new();
    *backend.grant.borrow_mut() =
        Some(AuthGrant { access_token: "T2".to_owned(), user_id: 2, email: "jane@x.com".to_owned(), name: None });
    let store = MemoryCredentials::default();

    let session = register(&backend, &store, "jane@x.com", "pw", "").await.unwrap();

    assert_eq!(session.identity().map(|i| i.name.as_str()), Some("jane"));
    assert_eq!(session.identity().map(|i| i.id), Some(2));
    assert_eq!(store.load(), Some(token("T2")));
    assert_eq!(*backend.registered_names.borrow(), vec![String::new()]);
}

#[tokio::test]
async fn register_prefers_backend_name_then_requested_name() {
    let backend = ScriptedBackend::new();
    let store = MemoryCredentials::default();

    let session = register(&backend, &store, "a@b.com", "pw", "  Ada L ").await.unwrap();
    assert_eq!(session.identity().map(|i| i.name.as_str()), Some("Ada L"));

    if let Some(grant) = backend.grant.borrow_mut().as_mut() {
        grant.name = Some("Countess".to_owned());
    }
    let session = register(&backend, &store, "a@b.com", "pw", "Ada").await.unwrap();
    assert_eq!(session.identity().map(|i| i.name.as_str()), Some("Countess"));
}

#[tokio::test]
async fn register_unreachable_backend_maps_to_connect_notice() {
    let backend = ScriptedBackend::new();
    backend.offline.set(true);
    let store = MemoryCredentials::default();

    let err = register(&backend, &store, "a@b.com", "pw", "").await.unwrap_err();

    assert_eq!(
        err.notice(crate::Operation::Register, "http://localhost:8000"),
        "Cannot connect to backend. Make sure backend is running on http://localhost:8000"
    );
}

// =============================================================
// logout / invalidate
// =============================================================

#[tokio::test]
async fn logout_clears_storage_and_context_without_backend_call() {
    let backend = ScriptedBackend::new();
    let store = MemoryCredentials::default();
    let session = login(&backend, &store, "a@b.com", "x").await.unwrap();
    assert!(session.is_signed_in());
    let calls_before = backend.call_count();

    let session = logout(&store);

    assert_eq!(session, Session::Anonymous);
    assert!(session.context().authorization().is_none());
    assert!(store.load().is_none());
    assert_eq!(backend.call_count(), calls_before);
}

#[test]
fn invalidate_clears_identity_credential_and_storage() {
    let store = MemoryCredentials::with(token("T"));
    let mut session = Session::SignedIn {
        identity: Identity { id: 1, email: "a@b.com".to_owned(), name: String::new() },
        credential: token("T"),
    };

    invalidate(&store, &mut session);

    assert!(session.identity().is_none());
    assert!(session.credential().is_none());
    assert!(session.context().authorization().is_none());
    assert!(store.load().is_none());
}

#[test]
fn email_local_part_handles_missing_at() {
    assert_eq!(email_local_part("jane@x.com"), "jane");
    assert_eq!(email_local_part("plain"), "plain");
}
