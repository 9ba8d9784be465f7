//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Credentials were rejected by the identity provider.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A login or registration call is already outstanding on this
    /// manager instance.
    #[error("another authentication request is in flight")]
    RequestInFlight,

    /// The identity provider or session storage failed.
    #[error("authentication unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Check if this is a credentials failure (as opposed to an
    /// availability problem).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }
}

impl From<quik_store::StoreError> for AuthError {
    fn from(err: quik_store::StoreError) -> Self {
        AuthError::Unavailable(err.to_string())
    }
}
