//! Session persistence schema.
//!
//! Two string-valued keys, mirroring what the storefront keeps in browser
//! local storage: the raw token under `"token"` and the JSON-encoded user
//! record under `"user"`. Both are written together and read together; a
//! partial or malformed pair is treated as no session at all.

use crate::session::Session;
use crate::user::User;
use quik_store::{KeyValueStore, StoreError};
use tracing::warn;

/// Storage key for the access token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Durable copy of the session, layered over a [`KeyValueStore`].
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Wrap a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted session, if there is a well-formed one.
    ///
    /// Anything else — missing keys, a token without a user, a user record
    /// that does not decode — is logged and treated as absent. Startup
    /// must never fail on bad persisted data.
    pub fn load(&self) -> Option<Session> {
        let token = match self.store.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                warn!(%err, "session token unreadable, treating as absent");
                None
            }
        };
        let user_raw = match self.store.get(USER_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, "session user unreadable, treating as absent");
                None
            }
        };

        match (token, user_raw) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(Session::new(user, token)),
                Err(err) => {
                    warn!(%err, "malformed persisted user record, treating as absent");
                    None
                }
            },
            (None, None) => None,
            _ => {
                warn!("partial persisted session (one of token/user), treating as absent");
                None
            }
        }
    }

    /// Persist the session under both keys.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        self.store.set_json(USER_KEY, &session.user)?;
        if let Err(err) = self.store.set(TOKEN_KEY, &session.token) {
            // Keep the both-or-neither schema: roll back the user key.
            let _ = self.store.delete(USER_KEY);
            return Err(err);
        }
        Ok(())
    }

    /// Remove the persisted session.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.delete(TOKEN_KEY)?;
        self.store.delete(USER_KEY)
    }
}
