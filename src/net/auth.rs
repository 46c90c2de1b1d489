//! Gateway to the remote authority: login, logout, password change.
//!
//! The gateway is the only writer of the session store. Status codes from
//! the authority are mapped to the closed [`ApiError`] taxonomy by the pure
//! classifiers below, so the mapping is unit-testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::error::ApiError;
use super::http;
use super::types::{ChangePasswordRequest, LoginRequest};
use crate::state::session::{Session, SessionState};

/// Reclassify a login failure: the authority answers 401 for bad
/// credentials and 403 for a deactivated account.
pub fn classify_login(err: ApiError) -> ApiError {
    match err {
        ApiError::Remote { status: 401, .. } => ApiError::InvalidCredentials,
        ApiError::Remote { status: 403, .. } => ApiError::AccountDisabled,
        other => other,
    }
}

/// Reclassify a password-change failure: 400 means the old credential was
/// rejected.
pub fn classify_password_change(err: ApiError) -> ApiError {
    match err {
        ApiError::Remote { status: 400, .. } => ApiError::WrongOldPassword,
        other => other,
    }
}

/// Auth calls bound to the session store they write through.
#[derive(Clone, Copy)]
pub struct AuthGateway {
    session: RwSignal<SessionState>,
}

impl AuthGateway {
    pub fn new(session: RwSignal<SessionState>) -> Self {
        Self { session }
    }

    fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// `POST /login`. On success the session is stored (token and user
    /// together) before this returns.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidCredentials`] on an authentication failure,
    /// [`ApiError::AccountDisabled`] on a deactivated account,
    /// [`ApiError::Unreachable`] on transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let session: Session = http::post("/login", None, &body)
            .await
            .map_err(classify_login)?;
        self.session.update(|s| s.set(session.clone()));
        Ok(session)
    }

    /// `POST /logout`, then clear the session store. Best-effort: transport
    /// and storage failures are swallowed, logout always succeeds locally.
    pub async fn logout(&self) {
        let _ = http::post_no_content("/logout", self.token().as_deref()).await;
        self.session.update(SessionState::clear);
    }

    /// `PATCH /change-password?id={user_id}`. On success the first-login
    /// flag is cleared on the stored user.
    ///
    /// # Errors
    ///
    /// [`ApiError::WrongOldPassword`] when the authority rejects the old
    /// credential, [`ApiError::Unreachable`] on transport failure.
    pub async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let body = ChangePasswordRequest {
            old_password: old_password.to_owned(),
            new_password: new_password.to_owned(),
        };
        let path = format!("/change-password?id={user_id}");
        http::patch_no_content(&path, self.token().as_deref(), &body)
            .await
            .map_err(classify_password_change)?;
        self.session.update(SessionState::complete_password_change);
        Ok(())
    }
}
