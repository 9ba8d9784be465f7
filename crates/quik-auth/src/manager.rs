//! Auth state machine.

use crate::error::AuthError;
use crate::notice::Notice;
use crate::persist::SessionStore;
use crate::provider::IdentityProvider;
use crate::session::Session;
use crate::user::User;
use quik_store::KeyValueStore;
use std::cell::{Cell, RefCell};
use std::fmt;
use tracing::{info, warn};

/// The two authentication states.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    /// Check if a session is active.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

type NoticeWatcher = Box<dyn Fn(&Notice)>;

/// Holds the optional session and drives the state transitions.
///
/// Owned by the composition root and injected into consumers. The identity
/// backend is the [`IdentityProvider`] seam; the durable session copy lives
/// behind a [`KeyValueStore`]. Single logical thread of execution: the only
/// asynchronous operations are `login` and `register`, and exactly one of
/// them may be outstanding per manager instance — an overlapping call is
/// rejected with [`AuthError::RequestInFlight`].
pub struct AuthManager<S: KeyValueStore> {
    provider: Box<dyn IdentityProvider>,
    sessions: SessionStore<S>,
    state: RefCell<AuthState>,
    in_flight: Cell<bool>,
    watchers: RefCell<Vec<NoticeWatcher>>,
}

impl<S: KeyValueStore> AuthManager<S> {
    /// Create a manager, rehydrating any persisted session.
    ///
    /// Malformed or partial persisted data is treated as absent; startup
    /// never fails on it.
    pub fn new(provider: Box<dyn IdentityProvider>, store: S) -> Self {
        let sessions = SessionStore::new(store);
        let state = match sessions.load() {
            Some(session) => {
                info!(email = %session.user.email, "restored persisted session");
                AuthState::Authenticated(session)
            }
            None => AuthState::Unauthenticated,
        };

        Self {
            provider,
            sessions,
            state: RefCell::new(state),
            in_flight: Cell::new(false),
            watchers: RefCell::new(Vec::new()),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Check if a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        match &*self.state.borrow() {
            AuthState::Authenticated(session) => Some(session.user.clone()),
            AuthState::Unauthenticated => None,
        }
    }

    /// The active access token, if any.
    pub fn token(&self) -> Option<String> {
        match &*self.state.borrow() {
            AuthState::Authenticated(session) => Some(session.token.clone()),
            AuthState::Unauthenticated => None,
        }
    }

    /// Check if a login or registration call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Register a subscriber for emitted notices.
    pub fn subscribe(&self, watcher: impl Fn(&Notice) + 'static) {
        self.watchers.borrow_mut().push(Box::new(watcher));
    }

    /// Sign in with email and password.
    ///
    /// On success the session is persisted and the state becomes
    /// `Authenticated`; on failure the state is unchanged and a failure
    /// notice is emitted. Never fatal.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let _flight = self.begin()?;

        match self.provider.authenticate(email, password).await {
            Ok(session) => match self.enter(session) {
                Ok(()) => {
                    self.emit(Notice::success("Login successful", "Welcome back!"));
                    Ok(())
                }
                Err(err) => {
                    self.emit(Notice::error(
                        "Login failed",
                        "An error occurred during login",
                    ));
                    Err(err)
                }
            },
            Err(err) => {
                let body = if err.is_auth_failure() {
                    "Invalid email or password"
                } else {
                    "An error occurred during login"
                };
                self.emit(Notice::error("Login failed", body));
                Err(err)
            }
        }
    }

    /// Create an account and sign it in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let _flight = self.begin()?;

        match self.provider.register(name, email, password).await {
            Ok(session) => match self.enter(session) {
                Ok(()) => {
                    self.emit(Notice::success(
                        "Registration successful",
                        "Your account has been created",
                    ));
                    Ok(())
                }
                Err(err) => {
                    self.emit(Notice::error(
                        "Registration failed",
                        "An error occurred during registration",
                    ));
                    Err(err)
                }
            },
            Err(err) => {
                self.emit(Notice::error(
                    "Registration failed",
                    "An error occurred during registration",
                ));
                Err(err)
            }
        }
    }

    /// Sign out unconditionally, discarding the session and its durable
    /// copy.
    pub fn logout(&self) {
        if let Err(err) = self.sessions.clear() {
            warn!(%err, "failed to clear persisted session");
        }
        *self.state.borrow_mut() = AuthState::Unauthenticated;
        info!("signed out");
        self.emit(Notice::success(
            "Logged out",
            "You have been successfully logged out",
        ));
    }

    /// Persist a fresh session and enter the authenticated state.
    ///
    /// Persistence failure keeps the state `Unauthenticated` — a session
    /// that survives only until the next reload would violate the
    /// both-keys-or-neither storage schema.
    fn enter(&self, session: Session) -> Result<(), AuthError> {
        if let Err(err) = self.sessions.save(&session) {
            warn!(%err, "failed to persist session");
            return Err(err.into());
        }
        info!(email = %session.user.email, "signed in");
        *self.state.borrow_mut() = AuthState::Authenticated(session);
        Ok(())
    }

    fn begin(&self) -> Result<Flight<'_>, AuthError> {
        if self.in_flight.replace(true) {
            return Err(AuthError::RequestInFlight);
        }
        Ok(Flight(&self.in_flight))
    }

    fn emit(&self, notice: Notice) {
        for watcher in self.watchers.borrow().iter() {
            watcher(&notice);
        }
    }
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for AuthManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthManager")
            .field("state", &self.state.borrow())
            .field("in_flight", &self.in_flight.get())
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

/// Clears the in-flight flag when the request completes, even on early
/// return.
struct Flight<'a>(&'a Cell<bool>);

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
