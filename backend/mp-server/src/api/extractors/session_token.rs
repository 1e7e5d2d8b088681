//! Axum extractor for the request-scoped session token

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// The session token presented with a request, if any.
///
/// `Authorization: Bearer` wins over the session cookie; absence is not an
/// error here - the gate decides what a missing token means per route.
pub struct SessionToken(pub Option<String>);

/// Pull the token out of the headers. Factored out of the extractor so the
/// parsing is testable without building a full request.
pub(crate) fn token_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION)
        && let Ok(raw) = value.to_str()
        && let Some(token) = raw.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        return Some(token.to_string());
    }

    let raw_cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    for pair in raw_cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=')
            && name == cookie_name
            && !value.is_empty()
        {
            return Some(value.to_string());
        }
    }

    None
}

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = token_from_headers(&parts.headers, &state.cookie_name);
        async move { Ok(SessionToken(token)) }
    }
}
