use axum::extract::{Json, Query};
use axum::http::StatusCode;
use axum::response::Json as ResponseJson;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::common::{ApiResponse, portal_error_to_http};
use crate::data::mock_medicines;
use crate::errors::PortalError;
use crate::services::pharmacy::{
    StockEntry, StockFilter, adjust_issue_quantity, expiring, filter_medicines, low_stock,
};

#[derive(Debug, Default, Deserialize)]
pub struct StockQuery {
    pub filter: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StockListing {
    pub filter: StockFilter,
    pub low_stock_count: usize,
    pub expiring_count: usize,
    pub medicines: Vec<StockEntry>,
}

/// Stock listing with threshold and expiry classification
pub async fn stock(
    Query(query): Query<StockQuery>,
) -> Result<ResponseJson<ApiResponse<StockListing>>, (StatusCode, String)> {
    let filter = query
        .filter
        .as_deref()
        .unwrap_or_default()
        .parse::<StockFilter>()
        .map_err(portal_error_to_http)?;
    let search = query.q.unwrap_or_default();
    let today = Utc::now().date_naive();

    let inventory = mock_medicines();
    let medicines = filter_medicines(&inventory, &search, filter, today)
        .into_iter()
        .map(|m| StockEntry::classify(m, today))
        .collect();

    Ok(ResponseJson(ApiResponse::ok(StockListing {
        filter,
        low_stock_count: low_stock(&inventory).len(),
        expiring_count: expiring(&inventory, today).len(),
        medicines,
    })))
}

/// One +/- step on the issue screen's quantity stepper.
#[derive(Debug, Deserialize)]
pub struct IssueStep {
    pub medicine_id: String,
    pub quantity: u32,
    pub delta: i64,
}

#[derive(Debug, Serialize)]
pub struct IssueQuantity {
    pub medicine_id: String,
    pub available: u32,
    pub quantity: u32,
}

/// Applies a stepper change, keeping the quantity within stock on hand
pub async fn adjust_issue(
    Json(step): Json<IssueStep>,
) -> Result<ResponseJson<ApiResponse<IssueQuantity>>, (StatusCode, String)> {
    let inventory = mock_medicines();
    let medicine = inventory
        .iter()
        .find(|m| m.id == step.medicine_id)
        .ok_or_else(|| {
            portal_error_to_http(PortalError::validation(format!(
                "Unknown medicine '{}'",
                step.medicine_id
            )))
        })?;

    let quantity = adjust_issue_quantity(step.quantity, step.delta, medicine.total_stock);
    Ok(ResponseJson(ApiResponse::ok(IssueQuantity {
        medicine_id: step.medicine_id,
        available: medicine.total_stock,
        quantity,
    })))
}
