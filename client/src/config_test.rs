use super::*;

#[test]
fn normalize_strips_trailing_slashes_and_whitespace() {
    assert_eq!(normalize_base_url("  https://api.example.test//  "), Some("https://api.example.test".to_owned()));
}

#[test]
fn normalize_blank_is_none() {
    assert_eq!(normalize_base_url("   "), None);
    assert_eq!(normalize_base_url("/"), None);
}

#[test]
fn new_falls_back_to_default_for_blank_input() {
    assert_eq!(ApiConfig::new("").base_url(), DEFAULT_API_URL);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ApiConfig::new("https://api.example.test/v1/");
    assert_eq!(config.endpoint("/auth/login"), "https://api.example.test/v1/auth/login");
    assert_eq!(config.endpoint("events"), "https://api.example.test/v1/events");
}

#[test]
fn resolve_without_browser_uses_build_time_or_default() {
    let expected = option_env!("EVENTLY_API_URL")
        .and_then(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
    assert_eq!(ApiConfig::resolve().base_url(), expected);
}
