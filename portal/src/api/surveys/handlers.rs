use std::collections::BTreeMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json as ResponseJson;
use serde::{Deserialize, Serialize};

use crate::api::common::{ApiResponse, portal_error_to_http};
use crate::data::mock_survey_batches;
use crate::services::surveys::{
    Programme, SurveyBatch, SurveyStatus, filter_surveys, group_by_programme, pending_review,
};

#[derive(Debug, Default, Deserialize)]
pub struct SurveyQuery {
    /// A status name, or `all`.
    pub status: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SurveyListing {
    /// `None` when every status is shown
    pub status: Option<SurveyStatus>,
    pub pending_review: usize,
    pub total: usize,
    pub programmes: BTreeMap<Programme, Vec<SurveyBatch>>,
}

/// Filtered survey batches grouped by programme
pub async fn list_surveys(
    Query(query): Query<SurveyQuery>,
) -> Result<ResponseJson<ApiResponse<SurveyListing>>, (StatusCode, String)> {
    let status = match query.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(raw.parse::<SurveyStatus>().map_err(portal_error_to_http)?),
    };
    let search = query.q.unwrap_or_default();

    let batches = mock_survey_batches();
    let matching = filter_surveys(&batches, &search, status);
    let total = matching.len();
    let programmes = group_by_programme(matching)
        .into_iter()
        .map(|(programme, group)| (programme, group.into_iter().cloned().collect()))
        .collect();

    Ok(ResponseJson(ApiResponse::ok(SurveyListing {
        status,
        pending_review: pending_review(&batches),
        total,
        programmes,
    })))
}
