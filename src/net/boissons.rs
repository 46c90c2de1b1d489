//! Thin wrappers around the `/boissons` endpoints.

use super::error::ApiError;
use super::http;
use super::types::Boisson;

pub async fn fetch_all(token: Option<&str>) -> Result<Vec<Boisson>, ApiError> {
    http::get("/boissons", token).await
}

pub async fn fetch_one(id: i64, token: Option<&str>) -> Result<Boisson, ApiError> {
    http::get(&format!("/boissons/{id}"), token).await
}

pub async fn create(boisson: &Boisson, token: Option<&str>) -> Result<Boisson, ApiError> {
    http::post("/boissons", token, boisson).await
}

pub async fn update(id: i64, boisson: &Boisson, token: Option<&str>) -> Result<Boisson, ApiError> {
    http::put(&format!("/boissons/{id}"), token, boisson).await
}

/// Flip the activation flag; the API takes no body and answers with the
/// updated beverage.
pub async fn toggle_status(id: i64, token: Option<&str>) -> Result<Boisson, ApiError> {
    http::put_no_body(&format!("/boissons/{id}/statut"), token).await
}
