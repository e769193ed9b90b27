//! Survey batch listing for supervisors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::errors::PortalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    New,
    InReview,
    Verified,
    SentBack,
}

impl FromStr for SurveyStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in_review" => Ok(Self::InReview),
            "verified" => Ok(Self::Verified),
            "sent_back" => Ok(Self::SentBack),
            other => Err(PortalError::validation(format!(
                "Unknown survey status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Programme {
    #[serde(rename = "ANC")]
    Anc,
    #[serde(rename = "NCD")]
    Ncd,
    #[serde(rename = "TB")]
    Tb,
    Immunization,
    #[serde(rename = "RMNCH")]
    Rmnch,
    General,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyIndicators {
    pub anc_4_plus: u32,
    pub immunization_complete: u32,
    pub high_bp_count: u32,
    pub referrals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyBatch {
    pub id: String,
    pub batch_id: String,
    pub anm_name: String,
    pub anm_id: String,
    pub village: String,
    pub sub_centre: String,
    pub programme: Programme,
    pub status: SurveyStatus,
    pub total_households: u32,
    pub submitted_at: DateTime<Utc>,
    pub indicators: SurveyIndicators,
}

/// `None` keeps every status.
pub fn filter_surveys<'a>(
    batches: &'a [SurveyBatch],
    query: &str,
    status: Option<SurveyStatus>,
) -> Vec<&'a SurveyBatch> {
    let query = query.to_lowercase();
    batches
        .iter()
        .filter(|b| {
            b.batch_id.to_lowercase().contains(&query)
                || b.anm_name.to_lowercase().contains(&query)
                || b.village.to_lowercase().contains(&query)
        })
        .filter(|b| status.is_none_or(|s| b.status == s))
        .collect()
}

/// Groups batches by programme, keeping input order within each group.
pub fn group_by_programme<'a>(
    batches: impl IntoIterator<Item = &'a SurveyBatch>,
) -> BTreeMap<Programme, Vec<&'a SurveyBatch>> {
    let mut groups: BTreeMap<Programme, Vec<&SurveyBatch>> = BTreeMap::new();
    for batch in batches {
        groups.entry(batch.programme).or_default().push(batch);
    }
    groups
}

/// Batches still waiting for a supervisor decision.
pub fn pending_review(batches: &[SurveyBatch]) -> usize {
    batches
        .iter()
        .filter(|b| matches!(b.status, SurveyStatus::New | SurveyStatus::InReview))
        .count()
}
