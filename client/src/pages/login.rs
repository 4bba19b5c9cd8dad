//! Login page with a register toggle.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::Handles;
use crate::components::notice_banner::NoticeBanner;
use crate::util::guard::install_home_redirect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            Self::Login => "Need an account? Register",
            Self::Register => "Already have an account? Login",
        }
    }
}

/// Submit button text for `mode`.
pub fn submit_label(mode: AuthMode, submitting: bool) -> &'static str {
    match (mode, submitting) {
        (_, true) => "Please wait...",
        (AuthMode::Login, false) => "Login",
        (AuthMode::Register, false) => "Register",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let handles = Handles::from_context();
    let session = handles.session;
    install_home_redirect(session, use_navigate());

    let mode = RwSignal::new(AuthMode::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let submitting = move || session.with(|s| s.submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.submitting) {
            return;
        }
        match mode.get_untracked() {
            AuthMode::Login => handles.login(email.get_untracked(), password.get_untracked()),
            AuthMode::Register => {
                handles.register(email.get_untracked(), password.get_untracked(), name.get_untracked());
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Architectural Design Assistant"</h1>
                <p class="login-card__subtitle">{move || mode.get().title()}</p>
                <NoticeBanner/>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Name (optional)"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=submitting>
                        {move || submit_label(mode.get(), submitting())}
                    </button>
                </form>
                <button
                    class="login-toggle"
                    type="button"
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        handles.dismiss_notice();
                    }
                >
                    {move || mode.get().toggle_prompt()}
                </button>
            </div>
        </div>
    }
}
