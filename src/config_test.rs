use super::*;

#[test]
fn missing_value_uses_local_backend() {
    assert_eq!(HostConfig::from_value(None).api_base, "http://localhost:8000");
}

#[test]
fn blank_value_uses_local_backend() {
    assert_eq!(HostConfig::from_value(Some("  ")).api_base, "http://localhost:8000");
}

#[test]
fn trailing_slash_is_trimmed() {
    let config = HostConfig::from_value(Some(" https://design.example.com/ "));
    assert_eq!(config.api_base, "https://design.example.com");
}
