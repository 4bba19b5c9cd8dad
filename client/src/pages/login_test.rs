use super::*;

#[test]
fn mode_toggles_between_login_and_register() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled().toggled(), AuthMode::Register);
}

#[test]
fn submit_label_reflects_mode_and_progress() {
    assert_eq!(submit_label(AuthMode::Login, false), "Login");
    assert_eq!(submit_label(AuthMode::Register, false), "Register");
    assert_eq!(submit_label(AuthMode::Register, true), "Please wait...");
}

#[test]
fn toggle_prompt_offers_the_other_mode() {
    assert!(AuthMode::Login.toggle_prompt().ends_with("Register"));
    assert!(AuthMode::Register.toggle_prompt().ends_with("Login"));
}
