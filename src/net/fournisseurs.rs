//! Thin wrappers around the `/fournisseurs` endpoints.

use super::error::ApiError;
use super::http;
use super::types::Fournisseur;

pub async fn fetch_all(token: Option<&str>) -> Result<Vec<Fournisseur>, ApiError> {
    http::get("/fournisseurs", token).await
}

pub async fn fetch_one(id: i64, token: Option<&str>) -> Result<Fournisseur, ApiError> {
    http::get(&format!("/fournisseurs/{id}"), token).await
}

pub async fn create(fournisseur: &Fournisseur, token: Option<&str>) -> Result<Fournisseur, ApiError> {
    http::post("/fournisseurs", token, fournisseur).await
}

pub async fn update(
    id: i64,
    fournisseur: &Fournisseur,
    token: Option<&str>,
) -> Result<Fournisseur, ApiError> {
    http::put(&format!("/fournisseurs/{id}"), token, fournisseur).await
}
