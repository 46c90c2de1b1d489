//! Closed error taxonomy produced at the transport boundary.

use serde::Deserialize;
use thiserror::Error;

/// Every way a remote call can fail, as seen by the UI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("email ou mot de passe invalide")]
    InvalidCredentials,

    #[error("compte désactivé")]
    AccountDisabled,

    #[error("ancien mot de passe incorrect")]
    WrongOldPassword,

    #[error("serveur injoignable")]
    Unreachable,

    /// Any other remote failure, carrying the authority's message when the
    /// body provides one.
    #[error("erreur serveur ({status}): {message}")]
    Remote { status: u16, message: String },
}

#[derive(Deserialize)]
struct RemoteBody {
    message: Option<String>,
    error: Option<String>,
}

/// Build a [`ApiError::Remote`] from a non-2xx response body.
///
/// Prefers a JSON `message` field, then `error`; anything unparseable
/// collapses to an empty message.
pub fn remote(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<RemoteBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_default();
    ApiError::Remote { status, message }
}
