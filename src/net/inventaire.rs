//! Thin wrappers around the `/inventaire` endpoints.

use super::error::ApiError;
use super::http;
use super::types::{
    CreateLotRequest, CreateMouvementAjustementRequest, CreateMouvementSortieRequest,
    LigneOperation, Lot, Mouvement,
};

pub async fn create_entree(
    request: &CreateLotRequest,
    token: Option<&str>,
) -> Result<LigneOperation, ApiError> {
    http::post("/inventaire/entree", token, request).await
}

pub async fn create_sortie(
    request: &CreateMouvementSortieRequest,
    token: Option<&str>,
) -> Result<Mouvement, ApiError> {
    http::post("/inventaire/sortie", token, request).await
}

pub async fn create_ajustement(
    request: &CreateMouvementAjustementRequest,
    token: Option<&str>,
) -> Result<Mouvement, ApiError> {
    http::post("/inventaire/ajustement", token, request).await
}

pub async fn fetch_lots(token: Option<&str>) -> Result<Vec<Lot>, ApiError> {
    http::get("/inventaire/lots", token).await
}

pub async fn fetch_mouvements(token: Option<&str>) -> Result<Vec<Mouvement>, ApiError> {
    http::get("/inventaire/mouvements", token).await
}

pub async fn fetch_ligne_operations(token: Option<&str>) -> Result<Vec<LigneOperation>, ApiError> {
    http::get("/inventaire/ligne-operations-all", token).await
}
