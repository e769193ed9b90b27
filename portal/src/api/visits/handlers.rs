use axum::response::Json as ResponseJson;
use chrono::Utc;
use serde::Serialize;

use crate::api::common::ApiResponse;
use crate::data::mock_sub_centres;
use crate::services::visits::{SubCentre, VisitStatus, overdue, visit_status};

#[derive(Debug, Serialize)]
pub struct VisitEntry {
    #[serde(flatten)]
    pub sub_centre: SubCentre,
    pub visit_status: VisitStatus,
}

#[derive(Debug, Serialize)]
pub struct VisitListing {
    pub overdue_count: usize,
    pub sub_centres: Vec<VisitEntry>,
}

/// Sub-centres with their supervision visit status as of today.
pub async fn list_visits() -> ResponseJson<ApiResponse<VisitListing>> {
    let today = Utc::now().date_naive();
    let sub_centres = mock_sub_centres();

    let overdue_count = overdue(&sub_centres, today).len();
    let sub_centres = sub_centres
        .into_iter()
        .map(|sc| VisitEntry {
            visit_status: visit_status(sc.last_lhv_visit, today),
            sub_centre: sc,
        })
        .collect();

    ResponseJson(ApiResponse::ok(VisitListing {
        overdue_count,
        sub_centres,
    }))
}
