//! Supervision visit tracking for sub-centres.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// No visit for longer than this many days is overdue.
pub const OVERDUE_AFTER_DAYS: i64 = 30;
/// No visit for longer than this many days is due soon.
pub const DUE_SOON_AFTER_DAYS: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCentre {
    pub id: String,
    pub name: String,
    pub anm_name: String,
    pub anm_id: String,
    pub last_lhv_visit: Option<NaiveDate>,
    pub performance_score: u8,
    pub gaps: Vec<String>,
    pub villages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Overdue,
    DueSoon,
    Recent,
}

/// Classifies a sub-centre by days since the last supervisor visit. Never
/// visited counts as overdue.
pub fn visit_status(last_visit: Option<NaiveDate>, today: NaiveDate) -> VisitStatus {
    let Some(last_visit) = last_visit else {
        return VisitStatus::Overdue;
    };
    match (today - last_visit).num_days() {
        days if days > OVERDUE_AFTER_DAYS => VisitStatus::Overdue,
        days if days > DUE_SOON_AFTER_DAYS => VisitStatus::DueSoon,
        _ => VisitStatus::Recent,
    }
}

/// Sub-centres needing a visit now, in input order.
pub fn overdue<'a>(sub_centres: &'a [SubCentre], today: NaiveDate) -> Vec<&'a SubCentre> {
    sub_centres
        .iter()
        .filter(|sc| visit_status(sc.last_lhv_visit, today) == VisitStatus::Overdue)
        .collect()
}
