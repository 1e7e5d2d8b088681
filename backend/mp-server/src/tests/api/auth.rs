use crate::api::auth::auth::{callback_url, sanitize_next};

#[test]
fn given_absolute_path_when_sanitized_then_kept() {
    assert_eq!(sanitize_next(Some("/dashboard/profile")), "/dashboard/profile");
}

#[test]
fn given_missing_next_when_sanitized_then_dashboard() {
    assert_eq!(sanitize_next(None), "/dashboard");
}

#[test]
fn given_external_url_when_sanitized_then_dashboard() {
    assert_eq!(sanitize_next(Some("https://evil.example.com")), "/dashboard");
}

#[test]
fn given_protocol_relative_url_when_sanitized_then_dashboard() {
    assert_eq!(sanitize_next(Some("//evil.example.com")), "/dashboard");
}

#[test]
fn given_next_when_callback_url_built_then_encoded_query() {
    let url = callback_url("http://127.0.0.1:8000/", Some("/dashboard/profile"));

    assert_eq!(
        url,
        "http://127.0.0.1:8000/auth/callback?next=%2Fdashboard%2Fprofile"
    );
}

#[test]
fn given_no_next_when_callback_url_built_then_bare_path() {
    let url = callback_url("https://portal.example.com", None);

    assert_eq!(url, "https://portal.example.com/auth/callback");
}
