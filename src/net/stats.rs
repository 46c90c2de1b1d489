//! Thin wrapper around the dashboard statistics endpoint.

use super::error::ApiError;
use super::http;
use super::types::DashboardStatisticsDto;

pub async fn fetch_dashboard(token: Option<&str>) -> Result<DashboardStatisticsDto, ApiError> {
    http::get("/statistics/dashboard", token).await
}
