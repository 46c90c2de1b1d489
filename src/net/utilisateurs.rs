//! Thin wrappers around the `/utilisateurs` endpoints (user administration).

use super::error::ApiError;
use super::http;
use super::types::{StatusUpdateRequest, Utilisateur};

pub async fn fetch_all(token: Option<&str>) -> Result<Vec<Utilisateur>, ApiError> {
    http::get("/utilisateurs", token).await
}

pub async fn register(
    utilisateur: &Utilisateur,
    token: Option<&str>,
) -> Result<Utilisateur, ApiError> {
    http::post("/utilisateurs/register", token, utilisateur).await
}

pub async fn update(
    id: i64,
    utilisateur: &Utilisateur,
    token: Option<&str>,
) -> Result<Utilisateur, ApiError> {
    http::put(&format!("/utilisateurs/{id}"), token, utilisateur).await
}

pub async fn delete(id: i64, token: Option<&str>) -> Result<(), ApiError> {
    http::delete(&format!("/utilisateurs/{id}"), token).await
}

/// Enable or disable an account.
pub async fn set_status(
    id: i64,
    is_active: bool,
    token: Option<&str>,
) -> Result<Utilisateur, ApiError> {
    let body = StatusUpdateRequest { is_active };
    http::patch(&format!("/utilisateurs/{id}/status"), token, &body).await
}
