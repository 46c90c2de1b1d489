//! Session store: the bearer token and current-user snapshot.
//!
//! The session exists iff the user is logged in. Token and user are written
//! and cleared together; a pair with one half missing is treated as "not
//! authenticated". All writes go through to localStorage so the session
//! survives page reloads.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// Permission tier assigned to a user by the remote authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Manager,
    Employee,
    /// Any role this client does not recognize. Parses without failing but
    /// never passes a role allow-list.
    #[serde(other)]
    Unknown,
}

/// Snapshot of the authenticated user, as returned by `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub first_login: bool,
}

/// An authenticated session: opaque bearer token + user snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: CurrentUser,
}

/// In-memory mirror of the persisted session.
///
/// Reads are synchronous; writes persist through to localStorage keeping the
/// token and user slots in lockstep. Only the auth gateway mutates this —
/// the navigation guard is a pure reader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
}

impl SessionState {
    /// Build the state from persisted storage, once at boot.
    ///
    /// Fail-soft: if either slot is missing or unparseable the session is
    /// absent and both slots are cleared.
    pub fn hydrated() -> Self {
        Self {
            session: storage::read_session(),
        }
    }

    /// The current session, or `None` when not authenticated.
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The bearer token of the current session, if any.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Replace the session (token and user together) and persist it.
    pub fn set(&mut self, session: Session) {
        storage::write_session(&session);
        self.session = Some(session);
    }

    /// Drop the session and both storage slots. Used on logout.
    pub fn clear(&mut self) {
        storage::clear_session();
        self.session = None;
    }

    /// Clear the mandatory first-login flag after a successful password
    /// change and re-persist the user snapshot. No-op when logged out.
    pub fn complete_password_change(&mut self) {
        if let Some(session) = &mut self.session {
            session.user.first_login = false;
            storage::write_session(session);
        }
    }
}
