use std::fmt;

use itertools::Itertools;

use crate::normalize::CleanRecord;

pub struct Summary {
    pub total: usize,
    /// Non-null count per column, in column order.
    pub present: Vec<(&'static str, usize)>,
    /// Most common country first, ties by name.
    pub by_country: Vec<(String, usize)>,
}

impl Summary {
    pub fn from_records(records: &[CleanRecord]) -> Self {
        let counts = [
            records.iter().filter(|r| r.company_id.is_some()).count(),
            records.len(),
            records.len(),
            records.iter().filter(|r| r.email.is_some()).count(),
            records.iter().filter(|r| r.phone.is_some()).count(),
            records.len(),
        ];
        let present = CleanRecord::COLUMNS.into_iter().zip(counts).collect();

        let by_country = records
            .iter()
            .map(|r| r.country.as_str())
            .counts()
            .into_iter()
            .map(|(country, n)| (country.to_string(), n))
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .collect();

        Summary {
            total: records.len(),
            present,
            by_country,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records: {}", self.total)?;
        writeln!(f, "\nNon-null counts:")?;
        for (column, n) in &self.present {
            writeln!(f, "  {:<14} {:>5}", column, n)?;
        }
        writeln!(f, "\nCounts by Country:")?;
        for (country, n) in &self.by_country {
            let label = if country.is_empty() { "<empty>" } else { country.as_str() };
            writeln!(f, "  {:<24} {:>5}", label, n)?;
        }
        Ok(())
    }
}
