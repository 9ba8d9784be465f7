//! Identity and session state for the QuikShop storefront core.
//!
//! Holds the optional [`Session`] and drives the login / register / logout
//! transitions against an injected [`IdentityProvider`], persisting the
//! session to durable local storage and emitting human-readable
//! [`Notice`]s for the view layer to render.
//!
//! # Example
//!
//! ```rust,no_run
//! use quik_auth::{AuthManager, MockIdentityProvider};
//! use quik_store::MemoryStore;
//!
//! # async fn demo() {
//! let auth = AuthManager::new(
//!     Box::new(MockIdentityProvider::new()),
//!     MemoryStore::new(),
//! );
//!
//! auth.login("user@example.com", "password").await.unwrap();
//! assert!(auth.is_authenticated());
//! # }
//! ```

mod error;
mod manager;
mod notice;
mod persist;
mod provider;
mod session;
mod user;

pub use error::AuthError;
pub use manager::{AuthManager, AuthState};
pub use notice::{Notice, NoticeKind};
pub use persist::{SessionStore, TOKEN_KEY, USER_KEY};
pub use provider::{
    IdentityProvider, MockIdentityProvider, DEMO_EMAIL, DEMO_PASSWORD, DEMO_TOKEN,
};
pub use session::Session;
pub use user::User;
