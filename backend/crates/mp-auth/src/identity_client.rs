//! HTTP adapter for the external identity provider.
//!
//! Wraps the provider's REST surface: password authentication, passwordless
//! link requests, and one-time-code exchange. Every operation is a single
//! attempt; a failure is reported once and the caller decides whether to
//! re-prompt. Timeouts and 5xx responses surface as `ProviderUnavailable`
//! so transient upstream trouble is distinguishable from a bad credential.

use crate::{AuthError, Result as AuthErrorResult};

use mp_core::{AuthenticatedIdentity, RegistrationMetadata};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub struct IdentityProviderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Session material returned by password grant and code exchange.
#[derive(Debug, Clone)]
pub struct IdentitySession {
    pub access_token: String,
    pub identity: AuthenticatedIdentity,
}

#[derive(Debug, Deserialize)]
struct SessionPayload {
    access_token: String,
    user: UserPayload,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: Uuid,
    email: String,
    #[serde(default)]
    user_metadata: Option<MetadataPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct MetadataPayload {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    alternate_email: Option<String>,
    #[serde(default)]
    discord_handle: Option<String>,
    #[serde(default)]
    game_username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct PasswordGrantBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct PasswordlessBody<'a> {
    email: &'a str,
    create_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_to: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct VerifyBody<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    token: &'a str,
}

impl UserPayload {
    fn into_identity(self) -> AuthenticatedIdentity {
        let meta = self.user_metadata.unwrap_or_default();
        AuthenticatedIdentity::new(self.id, self.email).with_metadata(RegistrationMetadata {
            display_name: meta.full_name,
            alternate_email: meta.alternate_email,
            discord_handle: meta.discord_handle,
            game_username: meta.game_username,
        })
    }
}

impl IdentityProviderClient {
    #[track_caller]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> AuthErrorResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::ProviderUnavailable {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Authenticate with an email/password pair.
    pub async fn password_grant(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<IdentitySession> {
        let response = self
            .http
            .post(format!("{}/token?grant_type=password", self.base_url))
            .header("apikey", &self.api_key)
            .json(&PasswordGrantBody { email, password })
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::session_from(response, false).await
    }

    /// Ask the provider to send a single-use sign-in link to `email`.
    ///
    /// Side effect only: the confirmation travels out of band and comes back
    /// through the callback endpoint as a one-time code.
    pub async fn request_passwordless(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> AuthErrorResult<()> {
        let response = self
            .http
            .post(format!("{}/otp", self.base_url))
            .header("apikey", &self.api_key)
            .json(&PasswordlessBody {
                email,
                create_user: true,
                redirect_to,
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response, false).await)
        }
    }

    /// Exchange the one-time code from a confirmation link for a session.
    pub async fn exchange_code(&self, code: &str) -> AuthErrorResult<IdentitySession> {
        let response = self
            .http
            .post(format!("{}/verify", self.base_url))
            .header("apikey", &self.api_key)
            .json(&VerifyBody {
                kind: "magiclink",
                token: code,
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::session_from(response, true).await
    }

    #[track_caller]
    fn transport_error(e: reqwest::Error) -> AuthError {
        let message = if e.is_timeout() {
            "request timed out".to_string()
        } else {
            format!("request failed: {}", e)
        };

        AuthError::ProviderUnavailable {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    async fn session_from(
        response: reqwest::Response,
        code_exchange: bool,
    ) -> AuthErrorResult<IdentitySession> {
        if !response.status().is_success() {
            return Err(Self::rejection(response, code_exchange).await);
        }

        let payload: SessionPayload =
            response
                .json()
                .await
                .map_err(|e| AuthError::MalformedResponse {
                    message: format!("Failed to decode session payload: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(IdentitySession {
            access_token: payload.access_token,
            identity: payload.user.into_identity(),
        })
    }

    /// Map a non-success provider response onto the failure taxonomy.
    /// Reasons are surfaced verbatim; nothing is retried here.
    async fn rejection(response: reqwest::Response, code_exchange: bool) -> AuthError {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return AuthError::RateLimited {
                location: ErrorLocation::from(Location::caller()),
            };
        }

        if status.is_server_error() {
            return AuthError::ProviderUnavailable {
                message: format!("provider returned {}", status),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        let reason = response
            .json::<ErrorPayload>()
            .await
            .ok()
            .and_then(|p| p.error_description.or(p.msg).or(p.error))
            .unwrap_or_else(|| format!("provider returned {}", status));

        if code_exchange {
            AuthError::CodeRejected {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            AuthError::Rejected {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}
