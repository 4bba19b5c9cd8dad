#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use studio::Session;
use studio::credential::Credential;

/// Session plus request progress flags.
///
/// `loading` is set until the stored credential has been checked;
/// `submitting` while a login or registration request is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    pub loading: bool,
    pub submitting: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: Session::Anonymous, loading: true, submitting: false }
    }
}

impl SessionState {
    /// A settled state holding `session`.
    pub fn settled(session: Session) -> Self {
        Self { session, loading: false, submitting: false }
    }

    /// Header greeting: display name, else email.
    pub fn greeting(&self) -> Option<String> {
        self.session.identity().map(|identity| format!("Welcome, {}", identity.greeting_name()))
    }

    /// Whether a request started with `started` still belongs to this session.
    ///
    /// Replies are only written back while the credential is unchanged; a
    /// logout or a new login in between makes them stale.
    pub fn is_current(&self, started: Option<&Credential>) -> bool {
        self.session.credential() == started
    }
}
