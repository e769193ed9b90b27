//! Demo fixtures for the Rampur PHC: pharmacy inventory here, sub-centres
//! and survey batches in `field`.

mod field;

pub use field::{mock_sub_centres, mock_survey_batches};

use chrono::NaiveDate;

use crate::services::pharmacy::{Medicine, MedicineBatch};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

struct BatchSeed {
    id: &'static str,
    number: &'static str,
    quantity: u32,
    expiry: (i32, u32, u32),
    received: (i32, u32, u32),
}

fn medicine(
    id: &str,
    name: &str,
    generic_name: &str,
    category: &str,
    unit: &str,
    minimum_required: u32,
    batches: &[BatchSeed],
) -> Medicine {
    let batches: Vec<MedicineBatch> = batches
        .iter()
        .map(|seed| MedicineBatch {
            id: seed.id.to_string(),
            medicine_id: id.to_string(),
            batch_number: seed.number.to_string(),
            quantity: seed.quantity,
            expiry_date: date(seed.expiry.0, seed.expiry.1, seed.expiry.2),
            received_date: date(seed.received.0, seed.received.1, seed.received.2),
        })
        .collect();

    Medicine {
        id: id.to_string(),
        name: name.to_string(),
        generic_name: generic_name.to_string(),
        category: category.to_string(),
        unit: unit.to_string(),
        total_stock: batches.iter().map(|b| b.quantity).sum(),
        minimum_required,
        batches,
    }
}

/// Current stock on hand. `total_stock` is the sum of batch quantities.
pub fn mock_medicines() -> Vec<Medicine> {
    vec![
        medicine(
            "med-001",
            "Paracetamol 500mg",
            "Paracetamol",
            "Analgesic",
            "Tablet",
            500,
            &[
                BatchSeed {
                    id: "batch-001",
                    number: "PCM-2024-A1",
                    quantity: 1500,
                    expiry: (2025, 6, 15),
                    received: (2024, 1, 1),
                },
                BatchSeed {
                    id: "batch-002",
                    number: "PCM-2024-A2",
                    quantity: 1000,
                    expiry: (2025, 8, 20),
                    received: (2024, 1, 10),
                },
            ],
        ),
        medicine(
            "med-002",
            "Amoxicillin 250mg",
            "Amoxicillin",
            "Antibiotic",
            "Capsule",
            300,
            &[BatchSeed {
                id: "batch-003",
                number: "AMX-2024-B1",
                quantity: 800,
                expiry: (2024, 12, 31),
                received: (2024, 1, 5),
            }],
        ),
        medicine(
            "med-003",
            "ORS Sachets",
            "Oral Rehydration Salts",
            "Rehydration",
            "Sachet",
            200,
            &[BatchSeed {
                id: "batch-004",
                number: "ORS-2024-C1",
                quantity: 150,
                expiry: (2025, 3, 10),
                received: (2024, 1, 8),
            }],
        ),
        medicine(
            "med-004",
            "Amlodipine 5mg",
            "Amlodipine",
            "Antihypertensive",
            "Tablet",
            400,
            &[BatchSeed {
                id: "batch-005",
                number: "AML-2024-D1",
                quantity: 1200,
                expiry: (2025, 9, 25),
                received: (2024, 1, 12),
            }],
        ),
        medicine(
            "med-005",
            "Metformin 500mg",
            "Metformin",
            "Antidiabetic",
            "Tablet",
            350,
            &[BatchSeed {
                id: "batch-006",
                number: "MET-2024-E1",
                quantity: 950,
                expiry: (2025, 7, 18),
                received: (2024, 1, 3),
            }],
        ),
        medicine(
            "med-006",
            "Iron + Folic Acid",
            "Ferrous Sulphate + Folic Acid",
            "Supplement",
            "Tablet",
            500,
            &[BatchSeed {
                id: "batch-007",
                number: "IFA-2024-F1",
                quantity: 80,
                expiry: (2024, 4, 30),
                received: (2023, 12, 15),
            }],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pharmacy::{StockFilter, filter_medicines, low_stock};

    #[test]
    fn test_mock_inventory_totals() {
        let medicines = mock_medicines();
        assert_eq!(medicines.len(), 6);
        assert_eq!(medicines[0].total_stock, 2500);

        let low: Vec<_> = low_stock(&medicines).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(low, ["med-003", "med-006"]);
    }

    #[test]
    fn test_mock_inventory_expiring_window() {
        let medicines = mock_medicines();
        let today = date(2025, 5, 1);

        let found: Vec<_> = filter_medicines(&medicines, "", StockFilter::Expiring, today)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(found, ["med-001", "med-005"]);
    }
}
