//! Demo sub-centres and survey batches for the Rampur PHC supervisors.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::services::surveys::{Programme, SurveyBatch, SurveyIndicators, SurveyStatus};
use crate::services::visits::SubCentre;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sub_centre(
    id: &str,
    name: &str,
    anm: (&str, &str),
    last_visit: Option<(i32, u32, u32)>,
    performance_score: u8,
    gaps: &[&str],
    villages: &[&str],
) -> SubCentre {
    SubCentre {
        id: id.to_string(),
        name: name.to_string(),
        anm_name: anm.0.to_string(),
        anm_id: anm.1.to_string(),
        last_lhv_visit: last_visit.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        performance_score,
        gaps: owned(gaps),
        villages: owned(villages),
    }
}

/// Sub-centres under the PHC, in supervision order.
pub fn mock_sub_centres() -> Vec<SubCentre> {
    vec![
        sub_centre(
            "SC-001",
            "Sub Centre Rampur",
            ("Sunita Devi", "anm-001"),
            Some((2025, 1, 10)),
            82,
            &["ANC 4th visit follow-up"],
            &["Rampur", "Sundarpur"],
        ),
        sub_centre(
            "SC-002",
            "Sub Centre Kishanpur",
            ("Kamla Bai", "anm-002"),
            Some((2024, 12, 2)),
            64,
            &["Immunization dropouts", "BP screening coverage"],
            &["Kishanpur", "Madhopur"],
        ),
        sub_centre(
            "SC-003",
            "Sub Centre Bhagwanpur",
            ("Meena Kumari", "anm-003"),
            None,
            71,
            &[],
            &["Bhagwanpur"],
        ),
    ]
}

struct SurveySeed {
    id: &'static str,
    batch_id: &'static str,
    anm: (&'static str, &'static str),
    village: &'static str,
    sub_centre: &'static str,
    programme: Programme,
    status: SurveyStatus,
    total_households: u32,
    submitted_at: (i32, u32, u32, u32, u32),
    indicators: SurveyIndicators,
}

impl SurveySeed {
    fn build(self) -> SurveyBatch {
        let (y, mo, d, h, mi) = self.submitted_at;
        SurveyBatch {
            id: self.id.to_string(),
            batch_id: self.batch_id.to_string(),
            anm_name: self.anm.0.to_string(),
            anm_id: self.anm.1.to_string(),
            village: self.village.to_string(),
            sub_centre: self.sub_centre.to_string(),
            programme: self.programme,
            status: self.status,
            total_households: self.total_households,
            submitted_at: Utc
                .with_ymd_and_hms(y, mo, d, h, mi, 0)
                .single()
                .unwrap_or_default(),
            indicators: self.indicators,
        }
    }
}

/// Survey batches submitted by ANMs, newest first.
pub fn mock_survey_batches() -> Vec<SurveyBatch> {
    [
        SurveySeed {
            id: "sb-001",
            batch_id: "SB-2025-001",
            anm: ("Sunita Devi", "anm-001"),
            village: "Rampur",
            sub_centre: "SC-001",
            programme: Programme::Anc,
            status: SurveyStatus::New,
            total_households: 24,
            submitted_at: (2025, 1, 15, 10, 30),
            indicators: SurveyIndicators {
                anc_4_plus: 6,
                immunization_complete: 0,
                high_bp_count: 1,
                referrals: 2,
            },
        },
        SurveySeed {
            id: "sb-002",
            batch_id: "SB-2025-002",
            anm: ("Sunita Devi", "anm-001"),
            village: "Sundarpur",
            sub_centre: "SC-001",
            programme: Programme::Immunization,
            status: SurveyStatus::InReview,
            total_households: 31,
            submitted_at: (2025, 1, 14, 16, 5),
            indicators: SurveyIndicators {
                anc_4_plus: 0,
                immunization_complete: 18,
                high_bp_count: 0,
                referrals: 1,
            },
        },
        SurveySeed {
            id: "sb-003",
            batch_id: "SB-2025-003",
            anm: ("Kamla Bai", "anm-002"),
            village: "Kishanpur",
            sub_centre: "SC-002",
            programme: Programme::Ncd,
            status: SurveyStatus::Verified,
            total_households: 40,
            submitted_at: (2025, 1, 12, 9, 45),
            indicators: SurveyIndicators {
                anc_4_plus: 0,
                immunization_complete: 0,
                high_bp_count: 7,
                referrals: 4,
            },
        },
        SurveySeed {
            id: "sb-004",
            batch_id: "SB-2025-004",
            anm: ("Kamla Bai", "anm-002"),
            village: "Madhopur",
            sub_centre: "SC-002",
            programme: Programme::Anc,
            status: SurveyStatus::SentBack,
            total_households: 18,
            submitted_at: (2025, 1, 11, 11, 20),
            indicators: SurveyIndicators {
                anc_4_plus: 3,
                immunization_complete: 0,
                high_bp_count: 0,
                referrals: 0,
            },
        },
        SurveySeed {
            id: "sb-005",
            batch_id: "SB-2025-005",
            anm: ("Meena Kumari", "anm-003"),
            village: "Bhagwanpur",
            sub_centre: "SC-003",
            programme: Programme::Tb,
            status: SurveyStatus::New,
            total_households: 22,
            submitted_at: (2025, 1, 10, 14, 0),
            indicators: SurveyIndicators {
                anc_4_plus: 0,
                immunization_complete: 0,
                high_bp_count: 0,
                referrals: 3,
            },
        },
    ]
    .into_iter()
    .map(SurveySeed::build)
    .collect()
}
