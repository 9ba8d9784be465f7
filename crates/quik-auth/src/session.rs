//! Session type.

use crate::user::User;
use serde::{Deserialize, Serialize};

/// An authenticated identity: the user record plus its opaque access
/// token.
///
/// Holding both in one struct is what enforces the "both present or both
/// absent" invariant — there is no way to represent a token without a
/// user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// The signed-in user.
    pub user: User,
    /// Opaque access token.
    pub token: String,
}

impl Session {
    /// Create a session.
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_carries_user_and_token() {
        let session = Session::new(User::new("1", "John Doe", "user@example.com"), "tok_abc");
        assert_eq!(session.user.name, "John Doe");
        assert_eq!(session.token, "tok_abc");
    }
}
