//! DTOs exchanged with the remote inventory API.
//!
//! Field names follow the API's camelCase wire format. These are plain data
//! carriers; the one piece of client logic around them (the session guard)
//! lives in `nav` and `state`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::Role;

/// A beverage in the catalogue.
///
/// The API historically serializes the activation flag as `active`; the
/// alias keeps older payloads parseable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boisson {
    pub id: Option<i64>,
    pub nom: String,
    #[serde(default)]
    pub description: Option<String>,
    pub prix_unitaire: f64,
    pub seuil_alerte: i32,
    #[serde(rename = "active", alias = "isActive")]
    pub is_active: bool,
}

/// A supplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fournisseur {
    pub id: Option<i64>,
    pub nom: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub adresse: Option<String>,
}

/// A stock lot of one beverage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: Option<i64>,
    pub numero_lot: String,
    pub quantite_initiale: i32,
    pub quantite_actuelle: i32,
    pub date_entree: String,
    pub date_peremption: String,
    #[serde(default)]
    pub boisson: Option<Boisson>,
    pub vendable: bool,
    #[serde(default)]
    pub fournisseur: Option<String>,
    #[serde(default)]
    pub mouvement_entree: Option<Box<Mouvement>>,
}

/// A stock movement (entry, exit or adjustment).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mouvement {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub type_mouvement: String,
    pub date_mouvement: String,
    pub quantite: i32,
    #[serde(default)]
    pub boisson_id: Option<i64>,
    #[serde(default)]
    pub boisson_nom: Option<String>,
    #[serde(default)]
    pub lot_id: Option<i64>,
    #[serde(default)]
    pub lot_numero: Option<String>,
    #[serde(default)]
    pub utilisateur_id: Option<i64>,
    #[serde(default)]
    pub utilisateur_email: Option<String>,
    #[serde(default)]
    pub type_ajustement: Option<String>,
    #[serde(default)]
    pub raison: Option<String>,
    #[serde(default)]
    pub ligne_operations: Option<Vec<LigneOperation>>,
}

/// One line of an inventory operation, tying a movement to a lot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneOperation {
    pub id: Option<i64>,
    #[serde(default)]
    pub mouvement: Option<Box<Mouvement>>,
    #[serde(default)]
    pub lot: Option<Lot>,
    pub quantite: i32,
}

/// Aggregated stock level for one beverage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: Option<i64>,
    pub boisson: Boisson,
    pub quantite_totale: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A user account, as managed from the administration page.
///
/// Same shape as the session's `CurrentUser` plus the write-only password
/// field and audit timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilisateur {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mot_de_passe: Option<String>,
    pub is_active: bool,
    pub first_login: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Dashboard statistics
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMovementsDto {
    pub dates: Vec<String>,
    pub entries: Vec<i64>,
    pub exits: Vec<i64>,
    pub adjustments: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementTrendDto {
    pub period: String,
    pub total_movements: i64,
    pub trend: Trend,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyDatasetDto {
    pub label: String,
    pub data: Vec<i64>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStockMovementDto {
    pub week_dates: Vec<String>,
    pub datasets: Vec<WeeklyDatasetDto>,
    pub total_entries: i64,
    pub total_exits: i64,
    pub total_adjustments: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlertDto {
    pub beverage_name: String,
    pub current_stock_level: i32,
    pub threshold_level: i32,
    pub alert_severity_level: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatisticsDto {
    #[serde(default)]
    pub daily_movements: Option<DailyMovementsDto>,
    #[serde(default)]
    pub weekly_stock_movement: Option<WeeklyStockMovementDto>,
    #[serde(default)]
    pub movement_trends: Option<Vec<MovementTrendDto>>,
    #[serde(default)]
    pub stock_alerts: Option<Vec<StockAlertDto>>,
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLotRequest {
    pub lot: Lot,
    pub utilisateur: Utilisateur,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMouvementSortieRequest {
    pub boisson_id: i64,
    pub quantite_demandee: i32,
    pub utilisateur: Utilisateur,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMouvementAjustementRequest {
    pub lot_id: i64,
    pub delta: i32,
    pub raison: String,
    pub utilisateur: Utilisateur,
}
