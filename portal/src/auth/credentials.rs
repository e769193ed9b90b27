//! Static credential store consulted by login.

use std::collections::HashMap;

use crate::auth::models::{CredentialRecord, Role, UserProfile};

/// Read-only lookup from staff identifier to credential record.
pub trait CredentialStore: Send + Sync {
    fn lookup(&self, identifier: &str) -> Option<&CredentialRecord>;
}

/// In-memory credential table, fixed for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    records: HashMap<String, CredentialRecord>,
}

impl StaticCredentialStore {
    pub fn new(records: impl IntoIterator<Item = (String, CredentialRecord)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Demo staff for the Rampur PHC. Every account uses the secret `1234`.
    pub fn demo() -> Self {
        const PHC_ID: &str = "PHC-001";
        const PHC_NAME: &str = "Primary Health Centre, Rampur";

        let staff = [
            (
                "lhv-001",
                "Dr. Priya Sharma",
                "9876543210",
                Role::Lhv,
                Some(vec!["SC-001", "SC-002", "SC-003"]),
                None,
            ),
            ("pharm-001", "Rajesh Kumar", "9876543211", Role::Pharmacist, None, None),
            ("admin-001", "Suresh Verma", "9876543212", Role::Admin, None, None),
            (
                "anm-001",
                "Sunita Devi",
                "9876543213",
                Role::Anm,
                Some(vec!["SC-001"]),
                Some(vec!["Rampur", "Sundarpur"]),
            ),
        ];

        Self::new(
            staff
                .into_iter()
                .map(|(id, name, phone, role, sub_centres, villages)| {
                    let owned = |list: Vec<&str>| -> Vec<String> {
                        list.into_iter().map(str::to_string).collect()
                    };
                    let profile = UserProfile {
                        id: id.to_string(),
                        name: name.to_string(),
                        phone: phone.to_string(),
                        role,
                        phc_id: PHC_ID.to_string(),
                        phc_name: PHC_NAME.to_string(),
                        sub_centres: sub_centres.map(owned),
                        villages: villages.map(owned),
                    };
                    (
                        phone.to_string(),
                        CredentialRecord {
                            secret: "1234".to_string(),
                            profile,
                        },
                    )
                }),
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl CredentialStore for StaticCredentialStore {
    fn lookup(&self, identifier: &str) -> Option<&CredentialRecord> {
        self.records.get(identifier)
    }
}
