//! Pharmacy stock classification.
//!
//! Every function here is a single pass over an in-memory list. Dates are
//! passed in explicitly so callers control "today".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::PortalError;

/// Batches expiring within this many days count as "expiring".
pub const EXPIRING_WINDOW_DAYS: i64 = 90;
/// Batches expiring within this many days are critical.
pub const CRITICAL_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineBatch {
    pub id: String,
    pub medicine_id: String,
    pub batch_number: String,
    pub quantity: u32,
    pub expiry_date: NaiveDate,
    pub received_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub category: String,
    pub unit: String,
    pub total_stock: u32,
    pub minimum_required: u32,
    pub batches: Vec<MedicineBatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Active,
    LowStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Expired,
    Critical,
    Expiring,
    Good,
}

/// Filter chips on the stock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockFilter {
    #[default]
    All,
    Low,
    Expiring,
}

impl FromStr for StockFilter {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "expiring" => Ok(Self::Expiring),
            other => Err(PortalError::validation(format!(
                "Unknown stock filter '{other}'"
            ))),
        }
    }
}

/// Signed day count from `today` to `date`; negative once `date` has passed.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

pub fn stock_status(medicine: &Medicine) -> StockStatus {
    if medicine.total_stock < medicine.minimum_required {
        StockStatus::LowStock
    } else {
        StockStatus::Active
    }
}

pub fn batch_status(expiry_date: NaiveDate, today: NaiveDate) -> BatchStatus {
    match days_until(expiry_date, today) {
        days if days <= 0 => BatchStatus::Expired,
        days if days <= CRITICAL_WINDOW_DAYS => BatchStatus::Critical,
        days if days <= EXPIRING_WINDOW_DAYS => BatchStatus::Expiring,
        _ => BatchStatus::Good,
    }
}

/// True when some batch expires within the window and has not expired yet.
pub fn is_expiring(medicine: &Medicine, today: NaiveDate) -> bool {
    medicine.batches.iter().any(|batch| {
        let days = days_until(batch.expiry_date, today);
        days > 0 && days <= EXPIRING_WINDOW_DAYS
    })
}

pub fn low_stock(medicines: &[Medicine]) -> Vec<&Medicine> {
    medicines
        .iter()
        .filter(|m| stock_status(m) == StockStatus::LowStock)
        .collect()
}

pub fn expiring(medicines: &[Medicine], today: NaiveDate) -> Vec<&Medicine> {
    medicines.iter().filter(|m| is_expiring(m, today)).collect()
}

fn matches_search(medicine: &Medicine, query: &str) -> bool {
    let query = query.to_lowercase();
    medicine.name.to_lowercase().contains(&query)
        || medicine.generic_name.to_lowercase().contains(&query)
}

/// Stock screen listing: case-insensitive search over name and generic name,
/// then the selected filter chip.
pub fn filter_medicines<'a>(
    medicines: &'a [Medicine],
    query: &str,
    filter: StockFilter,
    today: NaiveDate,
) -> Vec<&'a Medicine> {
    medicines
        .iter()
        .filter(|m| matches_search(m, query))
        .filter(|m| match filter {
            StockFilter::All => true,
            StockFilter::Low => stock_status(m) == StockStatus::LowStock,
            StockFilter::Expiring => is_expiring(m, today),
        })
        .collect()
}

/// Applies a +/- step to an issue quantity, clamped to `[0, available]`.
pub fn adjust_issue_quantity(current: u32, delta: i64, available: u32) -> u32 {
    let next = i64::from(current)
        .saturating_add(delta)
        .clamp(0, i64::from(available));
    u32::try_from(next).unwrap_or(available)
}

/// Per-medicine view used by the stock listing.
#[derive(Debug, Clone, Serialize)]
pub struct StockEntry {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub unit: String,
    pub total_stock: u32,
    pub minimum_required: u32,
    pub status: StockStatus,
    pub batches: Vec<BatchEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub batch_number: String,
    pub quantity: u32,
    pub expiry_date: NaiveDate,
    pub days_to_expiry: i64,
    pub status: BatchStatus,
}

impl StockEntry {
    pub fn classify(medicine: &Medicine, today: NaiveDate) -> Self {
        Self {
            id: medicine.id.clone(),
            name: medicine.name.clone(),
            generic_name: medicine.generic_name.clone(),
            unit: medicine.unit.clone(),
            total_stock: medicine.total_stock,
            minimum_required: medicine.minimum_required,
            status: stock_status(medicine),
            batches: medicine
                .batches
                .iter()
                .map(|batch| BatchEntry {
                    batch_number: batch.batch_number.clone(),
                    quantity: batch.quantity,
                    expiry_date: batch.expiry_date,
                    days_to_expiry: days_until(batch.expiry_date, today),
                    status: batch_status(batch.expiry_date, today),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn medicine(id: &str, name: &str, stock: u32, min: u32, expiries: &[NaiveDate]) -> Medicine {
        Medicine {
            id: id.to_string(),
            name: name.to_string(),
            generic_name: format!("{name} generic"),
            category: "General".to_string(),
            unit: "Tablet".to_string(),
            total_stock: stock,
            minimum_required: min,
            batches: expiries
                .iter()
                .enumerate()
                .map(|(i, expiry)| MedicineBatch {
                    id: format!("{id}-b{i}"),
                    medicine_id: id.to_string(),
                    batch_number: format!("{id}-{i}"),
                    quantity: stock,
                    expiry_date: *expiry,
                    received_date: date(2024, 1, 1),
                })
                .collect(),
        }
    }

    #[test]
    fn test_stock_status_threshold() {
        let today = date(2025, 1, 1);
        assert_eq!(
            stock_status(&medicine("a", "A", 199, 200, &[today])),
            StockStatus::LowStock
        );
        assert_eq!(
            stock_status(&medicine("a", "A", 200, 200, &[today])),
            StockStatus::Active
        );
    }

    #[test]
    fn test_batch_status_boundaries() {
        let today = date(2025, 1, 1);
        assert_eq!(batch_status(date(2024, 12, 31), today), BatchStatus::Expired);
        assert_eq!(batch_status(today, today), BatchStatus::Expired);
        assert_eq!(batch_status(date(2025, 1, 2), today), BatchStatus::Critical);
        assert_eq!(batch_status(date(2025, 1, 31), today), BatchStatus::Critical);
        assert_eq!(batch_status(date(2025, 2, 1), today), BatchStatus::Expiring);
        assert_eq!(batch_status(date(2025, 4, 1), today), BatchStatus::Expiring);
        assert_eq!(batch_status(date(2025, 4, 2), today), BatchStatus::Good);
    }

    #[test]
    fn test_expiring_excludes_already_expired() {
        let today = date(2025, 1, 1);
        let expired_only = medicine("x", "X", 10, 1, &[date(2024, 12, 1)]);
        let soon = medicine("y", "Y", 10, 1, &[date(2026, 1, 1), date(2025, 3, 1)]);
        let far = medicine("z", "Z", 10, 1, &[date(2026, 1, 1)]);

        assert!(!is_expiring(&expired_only, today));
        assert!(is_expiring(&soon, today));
        assert!(!is_expiring(&far, today));

        let all = vec![expired_only, soon, far];
        let ids: Vec<_> = expiring(&all, today).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["y"]);
    }

    #[test]
    fn test_filter_medicines_search_and_chips() {
        let today = date(2025, 1, 1);
        let list = vec![
            medicine("1", "Paracetamol 500mg", 2500, 500, &[date(2025, 6, 15)]),
            medicine("2", "ORS Sachets", 150, 200, &[date(2025, 3, 10)]),
            medicine("3", "Iron + Folic Acid", 80, 500, &[date(2026, 4, 30)]),
        ];

        let names = |found: Vec<&Medicine>| -> Vec<String> {
            found.into_iter().map(|m| m.id.clone()).collect()
        };

        assert_eq!(names(filter_medicines(&list, "", StockFilter::All, today)).len(), 3);
        assert_eq!(names(filter_medicines(&list, "", StockFilter::Low, today)), ["2", "3"]);
        assert_eq!(names(filter_medicines(&list, "", StockFilter::Expiring, today)), ["2"]);
        assert_eq!(names(filter_medicines(&list, "PARA", StockFilter::All, today)), ["1"]);
        assert_eq!(names(filter_medicines(&list, "folic", StockFilter::Low, today)), ["3"]);
        // generic name is searched too
        assert_eq!(names(filter_medicines(&list, "sachets generic", StockFilter::All, today)), ["2"]);
        assert_eq!(low_stock(&list).len(), 2);
    }

    #[test]
    fn test_stock_filter_parse() {
        assert_eq!("low".parse::<StockFilter>().unwrap(), StockFilter::Low);
        assert_eq!("".parse::<StockFilter>().unwrap(), StockFilter::All);
        assert!("expired".parse::<StockFilter>().is_err());
    }

    #[test]
    fn test_adjust_issue_quantity_clamps() {
        assert_eq!(adjust_issue_quantity(15, 1, 800), 16);
        assert_eq!(adjust_issue_quantity(0, -1, 800), 0);
        assert_eq!(adjust_issue_quantity(80, 5, 80), 80);
        assert_eq!(adjust_issue_quantity(10, -3, 0), 0);
        assert_eq!(adjust_issue_quantity(5, i64::MAX, u32::MAX), u32::MAX);
        assert_eq!(adjust_issue_quantity(u32::MAX, i64::MIN, u32::MAX), 0);
        assert_eq!(adjust_issue_quantity(u32::MAX, 1, 40), 40);
    }

    #[test]
    fn test_stock_entry_classify() {
        let today = date(2025, 1, 1);
        let med = medicine("2", "ORS Sachets", 150, 200, &[date(2025, 1, 20)]);

        let entry = StockEntry::classify(&med, today);

        assert_eq!(entry.status, StockStatus::LowStock);
        assert_eq!(entry.batches[0].days_to_expiry, 19);
        assert_eq!(entry.batches[0].status, BatchStatus::Critical);
    }
}
