use crate::{AuthError, Result as AuthErrorResult};

use mp_core::AuthenticatedIdentity;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims in a provider-issued session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the external identity id
    pub sub: String,
    /// Login email as known by the provider
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl SessionClaims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (identity id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if Uuid::parse_str(&self.sub).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub is not a valid identity id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match self.email.as_deref() {
            Some(email) if !email.is_empty() => Ok(()),
            _ => Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email claim is missing".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// The identity carried by the token.
    ///
    /// Tokens carry no registration metadata; that only travels on the
    /// password-grant and code-exchange responses.
    #[track_caller]
    pub fn to_identity(&self) -> AuthErrorResult<AuthenticatedIdentity> {
        let id = Uuid::parse_str(&self.sub).map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: "sub is not a valid identity id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let email = self.email.clone().unwrap_or_default();

        Ok(AuthenticatedIdentity::new(id, email))
    }
}
