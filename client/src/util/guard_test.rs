use super::*;
use studio::credential::Credential;
use studio::{Identity, Session};

fn signed_in() -> Session {
    Session::SignedIn {
        identity: Identity { id: 1, email: "a@b.com".to_owned(), name: String::new() },
        credential: Credential::parse("T").unwrap(),
    }
}

#[test]
fn anonymous_settled_session_redirects_to_login() {
    let state = SessionState::settled(Session::Anonymous);
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_home(&state));
}

#[test]
fn no_redirect_while_restoring() {
    let state = SessionState::default();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_home(&state));
}

#[test]
fn signed_in_session_redirects_home_only() {
    let state = SessionState::settled(signed_in());
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_home(&state));
}
