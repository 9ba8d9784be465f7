//! Identity provider seam.
//!
//! The manager talks to identity through this trait so a real server-backed
//! provider can replace the simulated one without touching the state
//! module's contract.

use crate::error::AuthError;
use crate::session::Session;
use crate::user::User;
use async_trait::async_trait;
use quik_commerce::ids::UserId;
use std::time::Duration;
use tokio::time::sleep;

/// Asynchronous identity backend.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Exchange credentials for a session.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Create an account and sign it in.
    async fn register(&self, name: &str, email: &str, password: &str)
        -> Result<Session, AuthError>;
}

/// The demo account email accepted by [`MockIdentityProvider`].
pub const DEMO_EMAIL: &str = "user@example.com";
/// The demo account password.
pub const DEMO_PASSWORD: &str = "password";
/// The fixed token issued to the demo account.
pub const DEMO_TOKEN: &str = "mock-jwt-token";

/// Simulated identity provider.
///
/// Accepts exactly the demo credential pair after a fixed latency;
/// registration always succeeds with a freshly generated id and token.
/// A real implementation would validate against a server and report
/// conflicts on duplicate registration.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    latency: Duration,
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockIdentityProvider {
    /// Provider with the stock 1-second simulated latency.
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(1000),
        }
    }

    /// Provider with custom latency (zero makes tests instant).
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        sleep(self.latency).await;

        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            Ok(Session::new(
                User::new("1", "John Doe", email),
                DEMO_TOKEN,
            ))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<Session, AuthError> {
        sleep(self.latency).await;

        Ok(Session::new(
            User::new(UserId::generate(), name, email),
            opaque_token(),
        ))
    }
}

/// Generate an opaque access token.
fn opaque_token() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 18] = rand::thread_rng().gen();
    format!("tok_{}", URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_demo_credentials_accepted() {
        let provider = MockIdentityProvider::new();
        let session = provider
            .authenticate(DEMO_EMAIL, DEMO_PASSWORD)
            .await
            .unwrap();

        assert_eq!(session.user.id.as_str(), "1");
        assert_eq!(session.user.name, "John Doe");
        assert_eq!(session.token, DEMO_TOKEN);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_credentials_rejected() {
        let provider = MockIdentityProvider::new();
        let err = provider
            .authenticate("bad@x.com", "wrong")
            .await
            .unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_always_succeeds_with_fresh_identity() {
        let provider = MockIdentityProvider::new();
        let a = provider
            .register("Jane Doe", "jane@example.com", "secret")
            .await
            .unwrap();
        let b = provider
            .register("Jane Doe", "jane@example.com", "secret")
            .await
            .unwrap();

        assert_eq!(a.user.name, "Jane Doe");
        assert!(a.token.starts_with("tok_"));
        assert_ne!(a.user.id, b.user.id);
        assert_ne!(a.token, b.token);
    }
}
