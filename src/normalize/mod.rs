pub mod country;
pub mod phone;
pub mod text;

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::parser::RawRecord;

/// A normalized company row. Field order is the column order of both sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanRecord {
    pub company_id: Option<i64>,
    pub company_name: String,
    pub category: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: String,
}

impl CleanRecord {
    pub const COLUMNS: [&'static str; 6] = [
        "company_id",
        "company_name",
        "category",
        "email",
        "phone",
        "country",
    ];

    pub fn from_raw(raw: &RawRecord) -> Self {
        CleanRecord {
            company_id: text::company_id(&raw.company_id),
            company_name: text::title_case(&raw.company_name),
            category: text::title_case(&raw.category),
            email: text::email(&raw.email),
            phone: phone::normalize(&raw.phone),
            country: country::normalize(&raw.country),
        }
    }
}

/// Clean every record, then drop later repeats of a `(company_id, email)` pair.
pub fn normalize(records: &[RawRecord]) -> Vec<CleanRecord> {
    let cleaned: Vec<CleanRecord> = records.iter().map(CleanRecord::from_raw).collect();
    dedup(cleaned)
}

/// Stable filter keeping the first record per `(company_id, email)`; `None`s compare equal.
pub fn dedup(records: Vec<CleanRecord>) -> Vec<CleanRecord> {
    let before = records.len();
    let kept: Vec<CleanRecord> = records
        .into_iter()
        .unique_by(|r| (r.company_id, r.email.clone()))
        .collect();
    debug!("Dropped {} duplicate records", before - kept.len());
    kept
}
