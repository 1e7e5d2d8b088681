use crate::{AuthError, Result as AuthErrorResult, SessionClaims};

use mp_core::{AuthenticatedIdentity, ErrorLocation};

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Validates provider-issued session tokens.
///
/// The provider signs sessions with the project's shared HS256 secret, so
/// the current identity can be read from the request-scoped token without a
/// network round trip.
pub struct SessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a token and return its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<SessionClaims> {
        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Identity for the current request, or None when no token is presented.
    ///
    /// An invalid or expired token is an error, not None: the caller decides
    /// whether that means re-prompting or a redirect.
    #[track_caller]
    pub fn current_identity(
        &self,
        token: Option<&str>,
    ) -> AuthErrorResult<Option<AuthenticatedIdentity>> {
        match token {
            None => Ok(None),
            Some(token) => {
                let claims = self.validate(token)?;
                Ok(Some(claims.to_identity()?))
            }
        }
    }
}
