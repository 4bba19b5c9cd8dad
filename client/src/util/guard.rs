//! Route guards shared by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gates which page is usable: the workspace sends anonymous
//! users to `/login`, the login page sends signed-in users back to `/`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether the workspace should send the user to `/login`.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.session.is_signed_in()
}

/// Whether the login page should send the user to the workspace.
pub fn should_redirect_home(state: &SessionState) -> bool {
    !state.loading && state.session.is_signed_in()
}

/// Redirect to `/login` whenever the session has settled without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` as soon as a user is signed in.
pub fn install_home_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_home(&session.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
