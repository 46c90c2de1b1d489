//! Persisted session slots in `localStorage`.
//!
//! Two keys are kept in lockstep: the raw bearer token and the serialized
//! user snapshot. A pair with one half missing or unparseable is treated as
//! no session at all, and both slots are cleared to restore the lockstep.
//! Every call is total; storage exceptions are swallowed. Requires a browser
//! environment — non-hydrate builds are inert.

use crate::state::session::Session;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "gestion_boissons_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "gestion_boissons_user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted session. Returns `None` unless both slots are present
/// and the user snapshot parses.
pub fn read_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user_json = storage.get_item(USER_KEY).ok().flatten();

        match (token, user_json) {
            (Some(token), Some(user_json)) => {
                match serde_json::from_str(&user_json) {
                    Ok(user) => Some(Session { token, user }),
                    Err(err) => {
                        // Malformed snapshot: recover locally as logged-out.
                        log::warn!("discarding malformed persisted session: {err}");
                        clear_session();
                        None
                    }
                }
            }
            (None, None) => None,
            _ => {
                log::warn!("discarding half-written persisted session");
                clear_session();
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both slots. Token first, then the user snapshot.
pub fn write_session(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(user_json) = serde_json::to_string(&session.user) {
                let _ = storage.set_item(TOKEN_KEY, &session.token);
                let _ = storage.set_item(USER_KEY, &user_json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove both slots. Best-effort: failures are swallowed.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
