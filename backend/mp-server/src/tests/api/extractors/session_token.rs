use crate::api::extractors::session_token::token_from_headers;

use axum::http::{HeaderMap, HeaderValue, header};

const COOKIE_NAME: &str = "mp_session";

#[test]
fn given_bearer_header_when_parsed_then_token_returned() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer abc.def.ghi"),
    );

    assert_eq!(
        token_from_headers(&headers, COOKIE_NAME).as_deref(),
        Some("abc.def.ghi")
    );
}

#[test]
fn given_session_cookie_when_parsed_then_token_returned() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; mp_session=abc.def.ghi; lang=en"),
    );

    assert_eq!(
        token_from_headers(&headers, COOKIE_NAME).as_deref(),
        Some("abc.def.ghi")
    );
}

#[test]
fn given_both_sources_when_parsed_then_bearer_wins() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer from-header"),
    );
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("mp_session=from-cookie"),
    );

    assert_eq!(
        token_from_headers(&headers, COOKIE_NAME).as_deref(),
        Some("from-header")
    );
}

#[test]
fn given_no_credentials_when_parsed_then_none() {
    let headers = HeaderMap::new();

    assert_eq!(token_from_headers(&headers, COOKIE_NAME), None);
}

#[test]
fn given_wrong_scheme_when_parsed_then_none() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );

    assert_eq!(token_from_headers(&headers, COOKIE_NAME), None);
}

#[test]
fn given_other_cookies_only_when_parsed_then_none() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; lang=en"),
    );

    assert_eq!(token_from_headers(&headers, COOKIE_NAME), None);
}
